//! # Configuration Module
//!
//! 회원가입 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, 요청 제한, 비밀번호 정책 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 안전한 기본값 (Safe Defaults)
//!
//! 모든 설정은 환경 변수가 없어도 동작하는 기본값을 가지며,
//! 보안 강도가 필요한 값(bcrypt cost)은 환경에 따라 자동으로 올라갑니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # 요청 제한
//! export RATE_LIMIT_PER_SECOND="10"
//! export RATE_LIMIT_BURST="20"
//!
//! # 비밀번호 정책
//! export PASSWORD_MIN_LENGTH="8"
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
