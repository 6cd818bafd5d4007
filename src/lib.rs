//! 회원가입 서비스 백엔드
//!
//! Rust 기반의 회원가입(Sign-Up) 처리 서비스입니다.
//! 필수 필드 검증, 비밀번호 정책/확인 검증, 이메일 형식 검증을 거쳐
//! 계정 생성 유스케이스에 위임하고, 모든 실패를 일관된 HTTP 상태 코드로 변환합니다.
//!
//! # Features
//!
//! - **입력 검증**: 필수 필드 존재 여부를 고정된 순서로 검사
//! - **도메인 검증기**: 이메일 형식, 비밀번호 규칙을 포트(trait)로 분리
//! - **계정 생성**: 검증된 입력만 계정 생성 콜라보레이터에 전달
//! - **에러 정규화**: 검증 실패는 400, 콜라보레이터 장애는 불투명한 500
//! - **생성자 주입**: 포트 구현체를 생성 시점에 주입하여 테스트 더블로 대체 가능
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  SignUpService  │ ← 검증 순서 + 에러 변환 결정 엔진
//! └─────────────────┘
//!          │ (포트: EmailValidator / PasswordValidator / AccountCreator)
//!          ▼
//! ┌─────────────────┐
//! │    Adapters     │ ← 형식 검증기, 정책 검증기, 계정 서비스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  In-Memory Repo │ ← 프로세스 로컬 계정 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use signup_service_backend::services::signup::SignUpService;
//! use signup_service_backend::services::validation::{EmailFormatValidator, PolicyPasswordValidator};
//! use signup_service_backend::services::accounts::AccountService;
//! use signup_service_backend::repositories::accounts::AccountRepository;
//!
//! // 기본 어댑터로 서비스 조립
//! let service = SignUpService::new(
//!     Arc::new(EmailFormatValidator::new()),
//!     Arc::new(PolicyPasswordValidator::new()),
//!     Arc::new(AccountService::new(Arc::new(AccountRepository::new()))),
//! );
//!
//! // 회원가입 처리
//! let account = service.sign_up(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
