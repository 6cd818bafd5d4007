//! 비밀번호 검증 포트

use super::PortResult;

/// 비밀번호 규칙 검증 콜라보레이터의 계약
///
/// 비밀번호 강도 규칙과 비밀번호 확인 일치 여부를 판정합니다.
/// 구체적인 규칙(최소 길이, 문자 구성 등)은 구현체의 책임입니다.
pub trait PasswordValidator: Send + Sync {
    /// 비밀번호가 규칙을 만족하는지 검사합니다.
    fn is_valid(&self, password: &str) -> PortResult<bool>;

    /// 비밀번호와 비밀번호 확인 값이 일치하는지 검사합니다.
    fn confirmation_is_matching(&self, password: &str, confirmation: &str) -> PortResult<bool>;
}
