//! # 인사말(Greeting) 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | {context}/greeting?name=이름 | 인사말 반환 (name 생략 시 "User") |
//! | GET | {context}/greeting/status | 애플리케이션 상태 메시지 반환 |
//!
//! 두 핸들러 모두 `String`/`&'static str`을 반환합니다.
//! Axum은 문자열 반환값을 `200 OK` + `Content-Type: text/plain; charset=utf-8`
//! 응답으로 자동 변환합니다. 실패 경로가 없으므로 `Result`를 쓰지 않습니다.

use axum::extract::{Query, State};

use crate::{services::DEFAULT_NAME, state::AppState};

/// `GET /greeting`의 쿼리 파라미터에서 모은 `name` 값들
///
/// `?name=Spring` → `GreetingQuery { names: ["Spring"] }`
/// `?name=a&name=b` → `GreetingQuery { names: ["a", "b"] }`
/// 파라미터가 없으면 `names`는 빈 벡터가 됩니다.
///
/// 퍼센트 인코딩(`%20`)과 `+` → 공백 변환은 serde_urlencoded가 처리합니다.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GreetingQuery {
    pub names: Vec<String>,
}

// From 트레이트: `Query<Vec<(String, String)>>`로 받은 (키, 값) 쌍 목록에서
// GreetingQuery를 만듭니다. `.into()`로 변환할 수 있게 됩니다.
impl From<Vec<(String, String)>> for GreetingQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let names = pairs
            .into_iter()
            // .filter_map(): 키가 "name"인 쌍만 남기고 값만 꺼냅니다
            .filter_map(|(key, value)| (key == "name").then_some(value))
            .collect();
        Self { names }
    }
}

impl GreetingQuery {
    /// 실제로 인사말에 쓸 이름을 결정합니다.
    ///
    /// - 같은 파라미터가 여러 번 오면 값을 `,`로 이어 붙입니다 (`a,b`).
    /// - 이어 붙인 결과가 빈 문자열이면 (파라미터 없음, `?name`, `?name=`)
    ///   기본값 `"User"`를 씁니다.
    /// - 그 외의 값은 공백이나 특수문자를 포함해도 손대지 않고 그대로 돌려줍니다.
    pub fn resolved_name(&self) -> String {
        // .join(","): Vec<String>의 원소들을 구분자로 이어 하나의 String으로 만듭니다
        let joined = self.names.join(",");
        if joined.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            joined
        }
    }
}

/// `GET /greeting` — 이름을 받아 인사말을 반환합니다.
///
/// # Extractor
/// - `State(state)`: main()에서 주입한 AppState (GreetingService 포함)
/// - `Query(pairs)`: URL 쿼리 문자열을 (키, 값) 쌍 목록으로 파싱
///
/// 구조체 필드(`Option<String>`)로 받으면 `?name=a&name=b`가 "duplicate field"로
/// 거절되므로, 쌍 목록으로 받아 `name` 값을 모두 모읍니다.
/// 어떤 쿼리 문자열이 와도 항상 `200 OK`를 반환합니다.
pub async fn greet(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> String {
    let query = GreetingQuery::from(pairs);
    let name = query.resolved_name();
    tracing::debug!(name = %name, "building greeting");
    state.greetings.greeting(&name)
}

/// `GET /greeting/status` — 애플리케이션 상태 메시지를 반환합니다.
pub async fn status(State(state): State<AppState>) -> &'static str {
    tracing::debug!("reporting application status");
    state.greetings.status()
}
