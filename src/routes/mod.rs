//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 회원가입 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 회원가입 API 엔드포인트
//! - 헬스체크 엔드포인트

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_signup_routes(cfg);
}

/// 회원가입 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/signup` - 회원가입
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"name","email":"email@example.com","password":"Password123","passwordConfirmation":"Password123"}'
/// ```
fn configure_signup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/signup").service(handlers::signup::sign_up));
}

/// 헬스체크 엔드포인트
///
/// 서비스 가동 여부와 버전 정보를 반환합니다.
///
/// # Endpoint
/// `GET /health`
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "signup_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "In-Memory",
            "dependency_injection": "Constructor"
        }
    }))
}
