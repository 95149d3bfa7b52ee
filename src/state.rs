//! # 애플리케이션 공유 상태
//!
//! 모든 핸들러가 `State(state): State<AppState>`로 접근하는 구조체입니다.
//! Spring의 `@Autowired` 필드 주입 대신, `main()`에서 직접 만든 값을
//! `Router::with_state()`로 넘겨주는 **명시적 의존성 주입**입니다.

use crate::services::GreetingService;

/// 애플리케이션 공유 상태
///
/// Axum의 State Extractor는 요청마다 AppState를 clone하므로 `Clone`이 필수입니다.
/// `GreetingService`는 필드 없는 구조체라 복제 비용이 없습니다.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// 인사말/상태 메시지를 만드는 서비스
    pub greetings: GreetingService,
}

impl AppState {
    /// 주어진 서비스로 상태를 만듭니다.
    pub fn new(greetings: GreetingService) -> Self {
        Self { greetings }
    }
}
