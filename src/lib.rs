//! # greeting-service
//!
//! `/greeting` 리소스 하나를 제공하는 작은 웹 애플리케이션입니다.
//!
//! 구성:
//! - `services`: 인사말/상태 문자열을 만드는 `GreetingService`
//! - `routes`: Axum 핸들러와 라우트 테이블
//! - `state`: 핸들러가 공유하는 `AppState`
//! - `config`: 환경변수 기반 설정
//! - `error`: 404 응답과 설정 에러
//!
//! 실행 파일(`main.rs`)과 통합 테스트(`tests/`)는 모두 `build_app()`으로
//! 같은 라우터를 조립합니다.

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer}, // CORS(Cross-Origin Resource Sharing) 설정
    trace::TraceLayer,      // HTTP 요청/응답 로깅 미들웨어
};

pub use config::Config;
pub use state::AppState;

/// 설정과 상태로 전체 애플리케이션 라우터를 조립합니다.
///
/// 1. 인사말 라우트를 컨텍스트 경로 아래에 붙입니다.
///    컨텍스트 경로가 비어 있으면 `.merge()`로 루트에 바로 붙입니다
///    (Axum 0.8은 루트 경로에 `.nest()`를 허용하지 않습니다).
/// 2. 매칭되지 않는 요청은 `routes::not_found`로 보냅니다.
/// 3. `.with_state()`로 AppState를 주입합니다.
/// 4. CORS와 요청 로깅 미들웨어를 씌웁니다.
pub fn build_app(config: &Config, state: AppState) -> Router {
    // `/greeting`, `/greeting/status` 두 라우트가 등록된 Router<AppState>
    let greeting_routes = routes::greeting_routes();

    // if-else가 표현식(expression)으로 사용됩니다.
    // 두 갈래 모두 Router<AppState>를 반환하므로 그대로 변수에 대입할 수 있습니다.
    let router = if config.context_path.is_empty() {
        // .merge(): 다른 라우터의 라우트들을 경로 변경 없이 합칩니다.
        Router::new().merge(greeting_routes)
    } else {
        // .nest(): 라우트들을 컨텍스트 경로 아래에 중첩시킵니다.
        // 예: /greeting → /springboot-learning/greeting
        // &config.context_path: String을 &str로 빌려줍니다 (소유권 이동 없음)
        Router::new().nest(&config.context_path, greeting_routes)
    };

    // CORS: 브라우저의 보안 정책. 다른 도메인에서의 API 호출을 허용/차단합니다.
    // 개발용 설정: 모든 출처/메서드/헤더를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)   // 모든 출처(origin) 허용
        .allow_methods(Any)  // 모든 HTTP 메서드 허용
        .allow_headers(Any); // 모든 헤더 허용

    router
        // .fallback(): 어떤 라우트에도 매칭되지 않은 요청을 처리할 핸들러
        .fallback(routes::not_found)
        // .with_state(): 모든 핸들러에서 State<AppState>를 쓸 수 있게 합니다.
        // 이 호출 이후 타입이 Router<AppState> → Router<()>로 바뀝니다.
        .with_state(state)
        // .layer(): 미들웨어를 추가합니다. 나중에 추가한 레이어가 바깥쪽에서 먼저 실행됩니다.
        .layer(cors)
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
}
