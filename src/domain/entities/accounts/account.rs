//! Account Entity Implementation
//!
//! 계정 엔티티의 핵심 구현체입니다.
//! 계정 생성 콜라보레이터가 반환하는 결과물로, 반환된 이후에는 변경되지 않습니다.

use serde::{Deserialize, Serialize};

/// 계정 엔티티
///
/// 회원가입이 성공했을 때 계정 생성 콜라보레이터가 돌려주는 도메인 객체입니다.
/// 요청마다 새로 생성되며, 반환 이후의 생명주기는 없습니다.
///
/// `password` 필드의 내용은 생성 콜라보레이터의 책임입니다.
/// 기본 구현체([`crate::services::accounts::AccountService`])는 bcrypt 해시를 담습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// 계정 고유 식별자
    pub id: String,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일
    pub email: String,
    /// 계정 비밀번호 (생성 콜라보레이터가 반환한 형태 그대로)
    pub password: String,
}

impl Account {
    /// 새 계정 생성
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
