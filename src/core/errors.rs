//! # Application Error Handling System
//!
//! 회원가입 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 사용자에게 보이는 에러는 두 종류뿐
//! - **MissingField**: 필수 요청 필드 누락 (400 Bad Request)
//! - **InvalidField**: 도메인 검증기가 거부한 필드 (400 Bad Request)
//!
//! ### 2. 그 외 모든 실패는 불투명한 500
//! 콜라보레이터(검증기, 계정 생성기)가 내부적으로 실패하면 원인을
//! 서버 로그에만 남기고 클라이언트에는 `ServerError` 하나로 정규화합니다.
//! 내부 구현 세부사항이 응답으로 누출되지 않습니다.
//!
//! ### 3. 자동 HTTP 응답 변환
//! `ResponseError` 구현으로 핸들러에서 `Result<_, AppError>`를 반환하면
//! Actix-Web이 상태 코드와 JSON 본문을 자동으로 생성합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `MissingField` | 400 Bad Request | 필수 필드 부재 (빈 문자열 포함) |
//! | `InvalidField` | 400 Bad Request | 비밀번호/확인/이메일 검증 실패 |
//! | `ServerError` | 500 Internal Server Error | 콜라보레이터 장애 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult, CollaboratorResult};
//!
//! async fn sign_up(&self, request: SignUpRequest) -> AppResult<Account> {
//!     let fields = request.into_fields()?; // MissingField
//!
//!     // 콜라보레이터 실패는 or_server_error()로 500에 정규화
//!     let valid = self.password_validator.is_valid(&fields.password).or_server_error()?;
//!     if !valid {
//!         return Err(AppError::InvalidField("password".to_string()));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 회원가입 요청 처리 중 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 요청 필드 누락 에러 (400 Bad Request)
    ///
    /// 요청 본문에 필드가 없거나, `null`이거나, 공백만 있는 경우 발생합니다.
    /// 페이로드에는 누락된 필드의 와이어 이름이 담깁니다 (예: `passwordConfirmation`).
    #[error("Missing field: {0}")]
    MissingField(String),

    /// 필드 값 검증 실패 에러 (400 Bad Request)
    ///
    /// 도메인 검증기(이메일 형식, 비밀번호 규칙, 비밀번호 확인 일치)가
    /// 해당 필드를 거부한 경우 발생합니다.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 콜라보레이터가 실패한 경우 원인을 제거하고 이 변형 하나로 정규화됩니다.
    /// 의도적으로 페이로드가 없습니다. 원인은 서버 로그에만 기록됩니다.
    #[error("Internal server error")]
    ServerError,
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// # 응답 형식
    ///
    /// ```json
    /// {
    ///   "error": "Missing field: name"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidField(_) => StatusCode::BAD_REQUEST,
            AppError::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 콜라보레이터 에러를 불투명한 ServerError로 정규화하는 확장 trait
///
/// 회원가입 결정 엔진의 경계에서 사용되는 catch-all 콤비네이터입니다.
/// 검증기나 계정 생성기가 어떤 이유로든 실패하면 원인을 error 레벨로
/// 로깅한 뒤 버리고, 클라이언트에는 `AppError::ServerError` 하나만 보여줍니다.
///
/// 재시도는 없으며 현재 요청은 그대로 종료됩니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::CollaboratorResult;
///
/// let email_is_valid = email_validator.is_valid(&email).or_server_error()?;
/// let account = account_creator.execute(input).await.or_server_error()?;
/// ```
pub trait CollaboratorResult<T> {
    /// 콜라보레이터 실패를 로깅 후 `AppError::ServerError`로 대체합니다.
    fn or_server_error(self) -> AppResult<T>;
}

impl<T, E> CollaboratorResult<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn or_server_error(self) -> AppResult<T> {
        self.map_err(|e| {
            log::error!("콜라보레이터 실패로 요청을 처리하지 못했습니다: {}", e);
            AppError::ServerError
        })
    }
}
