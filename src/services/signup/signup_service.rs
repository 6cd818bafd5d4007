//! # 회원가입 결정 엔진 구현
//!
//! 회원가입 요청 하나를 받아 응답 하나를 만들어내는 핵심 비즈니스 로직입니다.
//! 고정된 순서의 검증 단계를 첫 실패에서 중단하고, 통과하면 계정 생성
//! 콜라보레이터에 위임합니다.
//!
//! ## 처리 파이프라인
//!
//! ```text
//! SignUpRequest
//!      │
//!      ▼
//! ┌──────────────────────┐  부재 필드 발견
//! │ 1. 필수 필드 검사     │ ────────────────▶ 400 MissingField(필드명)
//! │    (고정 순서)        │
//! └──────────────────────┘
//!      │
//!      ▼
//! ┌──────────────────────┐  규칙 위반
//! │ 2. 비밀번호 규칙      │ ────────────────▶ 400 InvalidField("password")
//! └──────────────────────┘
//!      │
//!      ▼
//! ┌──────────────────────┐  불일치
//! │ 3. 비밀번호 확인 일치 │ ────────────────▶ 400 InvalidField("passwordConfirmation")
//! └──────────────────────┘
//!      │
//!      ▼
//! ┌──────────────────────┐  형식 오류
//! │ 4. 이메일 형식        │ ────────────────▶ 400 InvalidField("email")
//! └──────────────────────┘
//!      │
//!      ▼
//! ┌──────────────────────┐  생성 실패
//! │ 5. 계정 생성 위임     │ ────────────────▶ 500 ServerError
//! └──────────────────────┘
//!      │
//!      ▼
//! 200 + 생성된 Account
//! ```
//!
//! 단계 2~5에서 콜라보레이터 자체가 실패하면(검증 결과 false가 아니라
//! `Err` 반환) 원인을 로깅 후 버리고 불투명한 500으로 정규화합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult, CollaboratorResult};
use crate::domain::dto::signup::request::{
    FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION,
};
use crate::domain::dto::signup::SignUpRequest;
use crate::domain::entities::accounts::Account;
use crate::domain::ports::{AccountCreator, CreateAccount, EmailValidator, PasswordValidator};

/// 회원가입 결정 엔진
///
/// 세 개의 콜라보레이터 포트를 생성 시점에 주입받아 회원가입 요청을
/// 처리합니다. 자체 상태가 없으므로 `Arc`로 공유하여 동시 요청에
/// 그대로 사용할 수 있습니다.
///
/// ## 주요 책임 (Responsibilities)
///
/// 1. **필수 필드 검사**: `name` → `email` → `password` →
///    `passwordConfirmation` 순서로 존재 여부 확인
/// 2. **도메인 검증 순서 보장**: 비밀번호 규칙 → 확인 일치 → 이메일 형식
/// 3. **첫 실패 중단**: 어느 단계든 실패하면 이후 콜라보레이터는 호출하지 않음
/// 4. **입력 정제**: 계정 생성기에는 `{name, email, password}`만 전달
///    (비밀번호 확인 값은 제거)
/// 5. **에러 정규화**: 검증 거부는 400, 콜라보레이터 장애는 불투명한 500
///
/// ## 생성자 주입
///
/// ```rust,ignore
/// use std::sync::Arc;
///
/// let service = SignUpService::new(
///     Arc::new(EmailFormatValidator::new()),
///     Arc::new(PolicyPasswordValidator::new()),
///     Arc::new(AccountService::new(account_repo)),
/// );
///
/// let account = service.sign_up(request).await?;
/// ```
///
/// 테스트에서는 동일한 포트 계약을 만족하는 스텁으로 대체합니다.
pub struct SignUpService {
    /// 이메일 형식 검증 콜라보레이터
    email_validator: Arc<dyn EmailValidator>,
    /// 비밀번호 규칙/확인 검증 콜라보레이터
    password_validator: Arc<dyn PasswordValidator>,
    /// 계정 생성 콜라보레이터
    account_creator: Arc<dyn AccountCreator>,
}

impl SignUpService {
    /// 콜라보레이터를 주입하여 결정 엔진을 생성합니다.
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        password_validator: Arc<dyn PasswordValidator>,
        account_creator: Arc<dyn AccountCreator>,
    ) -> Self {
        Self {
            email_validator,
            password_validator,
            account_creator,
        }
    }

    /// 회원가입 요청을 처리합니다.
    ///
    /// # 인자
    ///
    /// * `request` - 역직렬화된 회원가입 요청 (모든 필드 선택적)
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 계정 생성 콜라보레이터가 반환한 계정 그대로
    /// * `Err(AppError::MissingField)` - 순서상 첫 번째 부재 필드
    /// * `Err(AppError::InvalidField)` - 검증기가 거부한 필드
    /// * `Err(AppError::ServerError)` - 콜라보레이터 장애 (원인은 로그에만 기록)
    ///
    /// 유일한 대기 지점은 계정 생성 콜라보레이터 호출입니다.
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<Account> {
        let fields = request.into_fields()?;

        let password_is_valid = self
            .password_validator
            .is_valid(&fields.password)
            .or_server_error()?;
        if !password_is_valid {
            log::debug!("회원가입 거부 - 비밀번호 규칙 위반");
            return Err(AppError::InvalidField(FIELD_PASSWORD.to_string()));
        }

        let confirmation_is_matching = self
            .password_validator
            .confirmation_is_matching(&fields.password, &fields.password_confirmation)
            .or_server_error()?;
        if !confirmation_is_matching {
            log::debug!("회원가입 거부 - 비밀번호 확인 불일치");
            return Err(AppError::InvalidField(
                FIELD_PASSWORD_CONFIRMATION.to_string(),
            ));
        }

        let email_is_valid = self
            .email_validator
            .is_valid(&fields.email)
            .or_server_error()?;
        if !email_is_valid {
            log::debug!("회원가입 거부 - 이메일 형식 오류");
            return Err(AppError::InvalidField(FIELD_EMAIL.to_string()));
        }

        // 비밀번호 확인 값은 여기서 버려진다
        let account = self
            .account_creator
            .execute(CreateAccount {
                name: fields.name,
                email: fields.email,
                password: fields.password,
            })
            .await
            .or_server_error()?;

        log::info!("회원가입 성공 - 계정 id: {}", account.id);

        Ok(account)
    }
}
