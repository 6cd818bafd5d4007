//! 데이터 액세스 리포지토리 모듈
//!
//! 계정 데이터의 저장과 조회를 담당합니다.
//! 이 서비스는 영속 저장 엔진을 사용하지 않으므로 저장소는 프로세스 로컬입니다.
//!
//! # Modules
//!
//! - [`accounts`] - 인메모리 계정 리포지토리

pub mod accounts;
