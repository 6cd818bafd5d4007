//! 이메일 형식 검증기
//!
//! `validator` 크레이트의 이메일 검사를 사용하는
//! [`EmailValidator`] 포트의 기본 구현체입니다.

use validator::ValidateEmail;

use crate::domain::ports::{EmailValidator, PortResult};

/// RFC 5322 기반 이메일 형식 검증기
///
/// 형식 검사만 수행하며 실제 수신 가능 여부(MX 조회 등)는 확인하지 않습니다.
/// 상태가 없으므로 실패하는 경우도 없습니다.
#[derive(Debug, Default)]
pub struct EmailFormatValidator;

impl EmailFormatValidator {
    /// 새 검증기 생성
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailFormatValidator {
    fn is_valid(&self, email: &str) -> PortResult<bool> {
        Ok(email.validate_email())
    }
}
