//! 인메모리 계정 리포지토리
//!
//! 계정 엔티티를 프로세스 메모리에 저장하는 리포지토리입니다.
//! 읽기/쓰기 모두 짧은 임계 구역 안에서 수행되므로 동시 요청에 안전합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::accounts::Account;
use crate::domain::ports::{PortError, PortResult};

/// 인메모리 계정 저장소
///
/// 계정 id를 키로 사용합니다. 잠금 오염은 저장소 장애로 취급되어
/// [`PortError`]로 변환됩니다.
pub struct AccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountRepository {
    /// 빈 리포지토리 생성
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// 계정을 저장합니다.
    pub fn insert(&self, account: Account) -> PortResult<()> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| PortError::new("계정 저장소 잠금이 오염되었습니다"))?;

        accounts.insert(account.id.clone(), account);
        Ok(())
    }

    /// 이메일로 계정을 조회합니다.
    pub fn find_by_email(&self, email: &str) -> PortResult<Option<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| PortError::new("계정 저장소 잠금이 오염되었습니다"))?;

        Ok(accounts
            .values()
            .find(|account| account.email == email)
            .cloned())
    }

    /// 해당 이메일의 계정이 이미 존재하는지 확인합니다.
    pub fn exists_by_email(&self, email: &str) -> PortResult<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    /// 저장된 계정 수를 반환합니다.
    pub fn count(&self) -> PortResult<usize> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| PortError::new("계정 저장소 잠금이 오염되었습니다"))?;

        Ok(accounts.len())
    }
}

impl Default for AccountRepository {
    fn default() -> Self {
        Self::new()
    }
}
