//! 회원가입 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::Account;

/// 계정 응답 DTO
///
/// 계정 생성 콜라보레이터가 반환한 계정을 가공 없이 그대로 담아 반환합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            name,
            email,
            password,
        } = account;

        Self {
            id,
            name,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_mirrors_account_exactly() {
        let account = Account::new("id", "name", "email@example.com", "password");
        let response = AccountResponse::from(account);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "id",
                "name": "name",
                "email": "email@example.com",
                "password": "password"
            })
        );
    }
}
