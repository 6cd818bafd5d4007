//! 회원가입 요청/응답 DTO 모듈

pub mod request;
pub mod response;

pub use request::{SignUpFields, SignUpRequest};
pub use response::AccountResponse;
