//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 인사말 서비스의 두 함수는 실패할 수 없습니다.
//! 에러가 생기는 곳은 두 군데뿐입니다:
//! - `AppError`: 매칭되는 라우트가 없는 요청 → HTTP 404 JSON 응답
//! - `ConfigError`: 서버 시작 시 잘못된 환경변수

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (200, 404 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// HTTP 요청 처리 중 발생하는 에러
///
/// 핸들러나 fallback에서 `AppError`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 결과: `{ "error": { "code": "not_found", "message": "Resource not found" } }`
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

/// 설정 로딩 에러
///
/// `Config::from_env()`가 반환합니다.
/// `main()`에서는 `?`로 anyhow::Error로 변환되어 프로세스가 종료됩니다.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// PORT 값이 0~65535 범위의 숫자가 아님
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// CONTEXT_PATH에 경로로 쓸 수 없는 문자(공백, `?`, `#`)가 있음
    #[error("invalid CONTEXT_PATH value: {0:?}")]
    InvalidContextPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn config_error_messages_name_the_variable() {
        assert_eq!(
            ConfigError::InvalidPort("abc".into()).to_string(),
            "invalid PORT value: \"abc\""
        );
        assert!(ConfigError::InvalidContextPath("/a b".into())
            .to_string()
            .contains("CONTEXT_PATH"));
    }
}
