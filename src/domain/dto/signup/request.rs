//! 회원가입 요청 DTO
//!
//! 회원가입을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 원본 와이어 형식은 스키마 강제가 없는 필드 가방이므로 모든 필드가
//! 선택적이며, 존재 여부는 역직렬화 단계가 아니라 결정 엔진이
//! 고정된 순서로 명시적으로 검사합니다.
//!
//! ## 필드 부재 규칙
//!
//! 다음은 모두 "필드 없음"으로 취급됩니다:
//!
//! - 요청 본문에 키 자체가 없는 경우
//! - 값이 `null`인 경우
//! - 값이 빈 문자열(`""`)이거나 공백만 있는 경우
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "name",
//!   "email": "email@example.com",
//!   "password": "password",
//!   "passwordConfirmation": "password"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::deserialize_optional_string;

/// `name` 필드의 와이어 이름
pub const FIELD_NAME: &str = "name";
/// `email` 필드의 와이어 이름
pub const FIELD_EMAIL: &str = "email";
/// `password` 필드의 와이어 이름
pub const FIELD_PASSWORD: &str = "password";
/// `passwordConfirmation` 필드의 와이어 이름
pub const FIELD_PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

/// 필수 필드와 그 검사 순서 (고정)
pub const REQUIRED_FIELDS: [&str; 4] = [
    FIELD_NAME,
    FIELD_EMAIL,
    FIELD_PASSWORD,
    FIELD_PASSWORD_CONFIRMATION,
];

/// 회원가입 요청 DTO
///
/// 클라이언트로부터 받은 회원가입 데이터를 표현합니다.
/// 빈 문자열과 공백만 있는 값은 역직렬화 시점에 `None`으로 정규화됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// 사용자 이름
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    /// 사용자 이메일 주소
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    /// 계정 비밀번호
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub password: Option<String>,

    /// 비밀번호 확인 (password와 일치해야 함)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub password_confirmation: Option<String>,
}

impl SignUpRequest {
    /// 필수 필드 존재 여부를 고정된 순서로 검사하고, 모두 존재하면
    /// 소유권 있는 [`SignUpFields`]로 변환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(SignUpFields)` - 네 필드가 모두 존재하는 경우
    /// * `Err(AppError::MissingField)` - 검사 순서상 첫 번째로 부재한 필드
    ///
    /// # 검사 순서
    ///
    /// `name` → `email` → `password` → `passwordConfirmation`.
    /// 여러 필드가 동시에 빠져 있어도 항상 순서상 앞선 필드가 보고됩니다.
    pub fn into_fields(self) -> AppResult<SignUpFields> {
        let Self {
            name,
            email,
            password,
            password_confirmation,
        } = self;

        let name = name.ok_or_else(|| AppError::MissingField(FIELD_NAME.to_string()))?;
        let email = email.ok_or_else(|| AppError::MissingField(FIELD_EMAIL.to_string()))?;
        let password = password.ok_or_else(|| AppError::MissingField(FIELD_PASSWORD.to_string()))?;
        let password_confirmation = password_confirmation
            .ok_or_else(|| AppError::MissingField(FIELD_PASSWORD_CONFIRMATION.to_string()))?;

        Ok(SignUpFields {
            name,
            email,
            password,
            password_confirmation,
        })
    }
}

/// 필수 필드 검증을 통과한 회원가입 입력
///
/// [`SignUpRequest::into_fields`]가 만들어내는, 네 필드가 모두 존재함이
/// 보장된 형태입니다. 도메인 검증기들은 이 구조체의 값만 다룹니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SignUpRequest {
        SignUpRequest {
            name: Some("name".to_string()),
            email: Some("email@example.com".to_string()),
            password: Some("password".to_string()),
            password_confirmation: Some("password".to_string()),
        }
    }

    #[test]
    fn test_deserialize_full_request_with_camel_case_keys() {
        let json = r#"{
            "name": "name",
            "email": "email@example.com",
            "password": "password",
            "passwordConfirmation": "password"
        }"#;

        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, Some("name".to_string()));
        assert_eq!(request.email, Some("email@example.com".to_string()));
        assert_eq!(request.password, Some("password".to_string()));
        assert_eq!(request.password_confirmation, Some("password".to_string()));
    }

    #[test]
    fn test_deserialize_treats_absent_null_and_blank_as_missing() {
        // 키 자체가 없는 경우
        let request: SignUpRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(request.name, None);

        // null 값
        let request: SignUpRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(request.name, None);

        // 빈 문자열
        let request: SignUpRequest = serde_json::from_str(r#"{"email": ""}"#).unwrap();
        assert_eq!(request.email, None);

        // 공백만 있는 문자열
        let request: SignUpRequest =
            serde_json::from_str(r#"{"passwordConfirmation": "   "}"#).unwrap();
        assert_eq!(request.password_confirmation, None);
    }

    #[test]
    fn test_into_fields_succeeds_when_all_fields_present() {
        let fields = full_request().into_fields().unwrap();

        assert_eq!(fields.name, "name");
        assert_eq!(fields.email, "email@example.com");
        assert_eq!(fields.password, "password");
        assert_eq!(fields.password_confirmation, "password");
    }

    #[test]
    fn test_into_fields_reports_each_missing_field_by_wire_name() {
        for field in REQUIRED_FIELDS {
            let mut request = full_request();
            match field {
                FIELD_NAME => request.name = None,
                FIELD_EMAIL => request.email = None,
                FIELD_PASSWORD => request.password = None,
                _ => request.password_confirmation = None,
            }

            let err = request.into_fields().unwrap_err();
            assert!(
                matches!(&err, AppError::MissingField(name) if name == field),
                "field {} produced {:?}",
                field,
                err
            );
        }
    }

    #[test]
    fn test_into_fields_reports_first_missing_field_in_fixed_order() {
        // name과 password가 동시에 빠져도 순서상 앞선 name이 보고된다
        let request = SignUpRequest {
            name: None,
            email: Some("email@example.com".to_string()),
            password: None,
            password_confirmation: None,
        };

        let err = request.into_fields().unwrap_err();
        assert!(matches!(&err, AppError::MissingField(name) if name == FIELD_NAME));

        // name이 있으면 다음 순서인 email이 보고된다
        let request = SignUpRequest {
            name: Some("name".to_string()),
            email: None,
            password: None,
            password_confirmation: None,
        };

        let err = request.into_fields().unwrap_err();
        assert!(matches!(&err, AppError::MissingField(name) if name == FIELD_EMAIL));
    }
}
