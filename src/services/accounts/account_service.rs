//! 계정 생성 서비스
//!
//! [`AccountCreator`] 포트의 기본 구현체입니다.
//! 중복 이메일 검사, 비밀번호 해싱, id 발급, 저장을 순서대로 수행합니다.

use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::hash;
use uuid::Uuid;

use crate::config::PasswordConfig;
use crate::domain::entities::accounts::Account;
use crate::domain::ports::{AccountCreator, CreateAccount, PortError, PortResult};
use crate::repositories::accounts::AccountRepository;
use crate::utils::string_utils::is_valid_string;

/// 계정 생성 비즈니스 로직 서비스
///
/// # 처리 과정
///
/// 1. **입력 가드**: 모든 입력이 비어 있지 않은지 확인
/// 2. **중복 검사**: 동일 이메일의 계정이 이미 있으면 거부
/// 3. **비밀번호 해싱**: bcrypt, cost는 실행 환경에 따라 결정
/// 4. **저장**: UUIDv4 id를 발급하고 리포지토리에 저장
///
/// 반환되는 [`Account`]의 `password` 필드에는 bcrypt 해시가 담깁니다.
/// 평문 비밀번호는 저장되지 않습니다.
///
/// # 에러 처리
///
/// 모든 실패는 [`PortError`]로 반환됩니다. 호출자(회원가입 결정 엔진)는
/// 이를 불투명한 500 응답으로 정규화하므로, 중복 이메일을 포함한 생성
/// 실패의 세부 원인은 클라이언트에 노출되지 않습니다.
pub struct AccountService {
    /// 계정 데이터 액세스 리포지토리
    account_repo: Arc<AccountRepository>,
    /// bcrypt 해싱 cost
    bcrypt_cost: u32,
}

impl AccountService {
    /// 환경 설정의 bcrypt cost로 서비스 생성
    pub fn new(account_repo: Arc<AccountRepository>) -> Self {
        Self::with_cost(account_repo, PasswordConfig::bcrypt_cost())
    }

    /// 지정한 bcrypt cost로 서비스 생성
    pub fn with_cost(account_repo: Arc<AccountRepository>, bcrypt_cost: u32) -> Self {
        Self {
            account_repo,
            bcrypt_cost,
        }
    }
}

#[async_trait]
impl AccountCreator for AccountService {
    async fn execute(&self, input: CreateAccount) -> PortResult<Account> {
        let CreateAccount {
            name,
            email,
            password,
        } = input;

        if !is_valid_string(&name) || !is_valid_string(&email) || !is_valid_string(&password) {
            return Err(PortError::new("계정 생성 입력이 비어 있습니다"));
        }

        if self.account_repo.exists_by_email(&email)? {
            return Err(PortError::new(format!(
                "이미 등록된 이메일입니다: {}",
                email
            )));
        }

        let password_hash = hash(password.as_str(), self.bcrypt_cost)
            .map_err(|e| PortError::new(format!("비밀번호 해싱 실패: {}", e)))?;

        let account = Account::new(Uuid::new_v4().to_string(), name, email, password_hash);
        self.account_repo.insert(account.clone())?;

        log::info!("새 계정 생성 완료 - id: {}", account.id);

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (AccountService, Arc<AccountRepository>) {
        let repo = Arc::new(AccountRepository::new());
        // 테스트에서는 최소 cost로 해싱 시간을 줄인다
        (AccountService::with_cost(repo.clone(), 4), repo)
    }

    fn input() -> CreateAccount {
        CreateAccount {
            name: "name".to_string(),
            email: "email@example.com".to_string(),
            password: "Password123".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_execute_creates_and_stores_account() {
        let (service, repo) = service();

        let account = service.execute(input()).await.unwrap();

        assert!(Uuid::parse_str(&account.id).is_ok());
        assert_eq!(account.name, "name");
        assert_eq!(account.email, "email@example.com");
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(
            repo.find_by_email("email@example.com").unwrap(),
            Some(account)
        );
    }

    #[actix_web::test]
    async fn test_execute_hashes_the_password() {
        let (service, _repo) = service();

        let account = service.execute(input()).await.unwrap();

        assert_ne!(account.password, "Password123");
        assert!(bcrypt::verify("Password123", &account.password).unwrap());
    }

    #[actix_web::test]
    async fn test_execute_rejects_duplicate_email() {
        let (service, repo) = service();

        service.execute(input()).await.unwrap();
        let err = service.execute(input()).await.unwrap_err();

        assert!(err.to_string().contains("email@example.com"));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_execute_rejects_blank_input() {
        let (service, repo) = service();

        let blank = CreateAccount {
            name: "   ".to_string(),
            ..input()
        };

        assert!(service.execute(blank).await.is_err());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
