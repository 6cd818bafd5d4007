//! # Sign-Up HTTP Handler
//!
//! 회원가입 HTTP 엔드포인트를 처리하는 핸들러 함수입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/signup` | 회원가입 | 200 OK / 400 / 500 |
//!
//! ## 요청 본문
//!
//! ```json
//! {
//!   "name": "name",
//!   "email": "email@example.com",
//!   "password": "Password123",
//!   "passwordConfirmation": "Password123"
//! }
//! ```
//!
//! ## 응답
//!
//! ### 성공 (200 OK)
//! ```json
//! {
//!   "id": "0c6f1f3e-...",
//!   "name": "name",
//!   "email": "email@example.com",
//!   "password": "$2b$12$..."
//! }
//! ```
//!
//! ### 검증 실패 (400 Bad Request)
//! ```json
//! {
//!   "error": "Missing field: name"
//! }
//! ```
//! ```json
//! {
//!   "error": "Invalid field: passwordConfirmation"
//! }
//! ```
//!
//! ### 콜라보레이터 장애 (500 Internal Server Error)
//! ```json
//! {
//!   "error": "Internal server error"
//! }
//! ```
//!
//! # 사용 예제
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/signup \
//!   -H "Content-Type: application/json" \
//!   -d '{
//!     "name": "name",
//!     "email": "email@example.com",
//!     "password": "Password123",
//!     "passwordConfirmation": "Password123"
//!   }'
//! ```

use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::signup::{AccountResponse, SignUpRequest};
use crate::services::signup::SignUpService;

/// 회원가입 핸들러
///
/// 요청 본문을 [`SignUpRequest`]로 역직렬화하여 결정 엔진에 넘기고,
/// 생성된 계정을 200 OK로 반환합니다. 거부와 장애는 [`AppError`]의
/// `ResponseError` 구현이 상태 코드로 변환합니다.
#[post("")]
pub async fn sign_up(
    service: web::Data<SignUpService>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    let account = service.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{test, App};
    use async_trait::async_trait;

    use crate::domain::entities::accounts::Account;
    use crate::domain::ports::{AccountCreator, CreateAccount, PortError, PortResult};
    use crate::repositories::accounts::AccountRepository;
    use crate::services::accounts::AccountService;
    use crate::services::validation::{EmailFormatValidator, PolicyPasswordValidator};

    /// 기본 어댑터로 조립한 결정 엔진 (테스트용 bcrypt cost 4)
    fn default_service() -> SignUpService {
        let repo = Arc::new(AccountRepository::new());
        SignUpService::new(
            Arc::new(EmailFormatValidator::new()),
            Arc::new(PolicyPasswordValidator::with_min_length(8)),
            Arc::new(AccountService::with_cost(repo, 4)),
        )
    }

    /// 항상 실패하는 계정 생성기 (500 경로 검증용)
    struct FailingAccountCreator;

    #[async_trait]
    impl AccountCreator for FailingAccountCreator {
        async fn execute(&self, _input: CreateAccount) -> PortResult<Account> {
            Err(PortError::new("저장소 연결 끊김"))
        }
    }

    async fn post_signup(
        service: SignUpService,
        body: serde_json::Value,
    ) -> (actix_web::http::StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(web::scope("/api/v1/signup").service(super::sign_up)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(&body)
            .to_request();

        let response = test::call_service(&app, request).await;
        let status = response.status();
        let json = test::read_body_json(response).await;

        (status, json)
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "name": "name",
            "email": "email@example.com",
            "password": "Password123",
            "passwordConfirmation": "Password123"
        })
    }

    #[actix_web::test]
    async fn test_signup_returns_200_with_created_account() {
        let (status, body) = post_signup(default_service(), valid_body()).await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(body["name"], "name");
        assert_eq!(body["email"], "email@example.com");
        assert!(!body["id"].as_str().unwrap().is_empty());
        // 응답의 비밀번호는 생성기가 반환한 해시이지 평문이 아니다
        assert_ne!(body["password"], "Password123");
    }

    #[actix_web::test]
    async fn test_signup_returns_400_for_missing_field() {
        let (status, body) = post_signup(default_service(), serde_json::json!({})).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing field: name");
    }

    #[actix_web::test]
    async fn test_signup_returns_400_for_blank_field() {
        let mut request_body = valid_body();
        request_body["email"] = serde_json::json!("   ");

        let (status, body) = post_signup(default_service(), request_body).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing field: email");
    }

    #[actix_web::test]
    async fn test_signup_returns_400_for_weak_password() {
        let mut request_body = valid_body();
        request_body["password"] = serde_json::json!("weak");
        request_body["passwordConfirmation"] = serde_json::json!("weak");

        let (status, body) = post_signup(default_service(), request_body).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid field: password");
    }

    #[actix_web::test]
    async fn test_signup_returns_400_for_mismatched_confirmation() {
        let mut request_body = valid_body();
        request_body["passwordConfirmation"] = serde_json::json!("Password124");

        let (status, body) = post_signup(default_service(), request_body).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid field: passwordConfirmation");
    }

    #[actix_web::test]
    async fn test_signup_returns_400_for_malformed_email() {
        let mut request_body = valid_body();
        request_body["email"] = serde_json::json!("not-an-email");

        let (status, body) = post_signup(default_service(), request_body).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid field: email");
    }

    #[actix_web::test]
    async fn test_signup_returns_500_when_creator_fails() {
        let service = SignUpService::new(
            Arc::new(EmailFormatValidator::new()),
            Arc::new(PolicyPasswordValidator::with_min_length(8)),
            Arc::new(FailingAccountCreator),
        );

        let (status, body) = post_signup(service, valid_body()).await;

        assert_eq!(status, actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
