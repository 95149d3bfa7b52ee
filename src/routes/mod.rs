//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우트 테이블을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `greeting`: 인사말 / 상태 메시지 핸들러

pub mod greeting;

use axum::{http::Uri, routing::get, Router};

use crate::{error::AppError, state::AppState};

pub use greeting::*;

/// `/greeting` 리소스의 라우트 테이블
///
/// 어노테이션(`@GetMapping`) 대신 `.route(경로, 메서드(핸들러))`로
/// 경로와 핸들러를 직접 연결합니다.
/// 컨텍스트 경로는 여기서 붙이지 않고, `build_app()`에서 nest로 붙입니다.
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/greeting", get(greet))
        .route("/greeting/status", get(status))
}

/// 어떤 라우트에도 매칭되지 않은 요청을 처리하는 fallback 핸들러
///
/// `Uri` Extractor로 요청 경로를 받아 로그에 남기고 404를 반환합니다.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(%uri, "no route matched");
    AppError::NotFound
}
