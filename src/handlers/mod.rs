//! HTTP 요청 핸들러 모듈
//!
//! Actix-web 엔드포인트 함수들을 제공합니다.
//! 핸들러는 역직렬화와 응답 변환만 담당하고,
//! 결정은 전부 서비스 계층에 위임합니다.
//!
//! # Modules
//!
//! - [`signup`] - 회원가입 엔드포인트

pub mod signup;
