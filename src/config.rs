//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값: `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값: `8080`)
//! - `CONTEXT_PATH`: 모든 라우트 앞에 붙는 기본 경로 (기본값: `/springboot-learning`)
//!
//! 필수 항목은 없습니다. 값이 없으면 기본값을 쓰고,
//! 값이 있는데 형식이 잘못된 경우에만 `ConfigError`를 반환합니다.

use std::env;

use crate::error::ConfigError;

/// 기본 바인딩 주소
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// 기본 포트 번호
pub const DEFAULT_PORT: u16 = 8080;
/// 기본 컨텍스트 경로
pub const DEFAULT_CONTEXT_PATH: &str = "/springboot-learning";

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 라우터 조립(`build_app`)과 리스너 바인딩에 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// 정규화된 컨텍스트 경로
    ///
    /// 항상 `/`로 시작하고 `/`로 끝나지 않습니다 (예: `/springboot-learning`).
    /// 빈 문자열이면 라우트가 루트(`/greeting`)에 바로 등록됩니다.
    pub context_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            context_path: DEFAULT_CONTEXT_PATH.to_string(),
        }
    }
}

impl Config {
    /// 프로세스 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 실제 파싱은 `from_lookup()`에 위임합니다.
    /// `env::var(key).ok()`: 변수가 없거나 UTF-8이 아니면 `None`이 됩니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정을 만듭니다.
    ///
    /// 환경변수를 직접 읽지 않고 클로저를 받기 때문에,
    /// 테스트에서 전역 환경을 건드리지 않고 원하는 값을 넣어볼 수 있습니다.
    ///
    /// # 에러
    /// - `PORT`가 u16으로 파싱되지 않으면 `ConfigError::InvalidPort`
    /// - `CONTEXT_PATH`에 공백, `?`, `#`이 있으면 `ConfigError::InvalidContextPath`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // lookup("HOST"): Option<String>을 반환합니다.
        // unwrap_or_else(|| ...): None일 때만 클로저를 실행해 기본값을 만듭니다.
        // (unwrap_or와 달리 값이 있으면 기본값 String을 할당하지 않습니다)
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        // 포트는 문자열 → 숫자 변환이 필요합니다.
        // 값이 아예 없으면 기본값, 있는데 숫자가 아니면 에러로 알려줍니다.
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()   // " 8080 " 같은 앞뒤 공백 제거
                .parse()  // "8080" → 8080u16 (타입은 None 갈래의 u16에서 추론됩니다)
                // .map_err(): 파싱 에러를 우리의 ConfigError로 바꿉니다.
                // `?`: Err이면 즉시 함수에서 반환합니다.
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        // 컨텍스트 경로는 정규화 함수를 거칩니다 (예: "api/" → "/api")
        // &raw: String을 &str로 빌려줍니다.
        let context_path = match lookup("CONTEXT_PATH") {
            Some(raw) => normalize_context_path(&raw)?,
            None => DEFAULT_CONTEXT_PATH.to_string(),
        };

        // 필드 이름과 변수 이름이 같으면 `host: host` 대신 `host`로 줄여 쓸 수 있습니다.
        Ok(Self {
            host,
            port,
            context_path,
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        // format!: 문자열 포맷팅 매크로. Java의 String.format과 비슷합니다.
        format!("{}:{}", self.host, self.port)
    }
}

/// 컨텍스트 경로를 `/prefix` 형태로 정규화합니다.
///
/// - `"api"` → `"/api"`
/// - `"/api/"` → `"/api"`
/// - `""`, `"/"` → `""` (루트)
fn normalize_context_path(raw: &str) -> Result<String, ConfigError> {
    // .trim(): 앞뒤 공백 제거, .trim_matches('/'): 앞뒤의 '/'를 모두 제거
    let trimmed = raw.trim().trim_matches('/');

    // .chars().any(...): 조건을 만족하는 문자가 하나라도 있으면 true
    // 경로 중간의 공백, 쿼리(?), 프래그먼트(#)는 라우트 경로로 쓸 수 없습니다.
    if trimmed
        .chars()
        .any(|c| c.is_whitespace() || c == '?' || c == '#')
    {
        return Err(ConfigError::InvalidContextPath(raw.to_string()));
    }

    // 빈 문자열은 "루트에 바로 등록"을 뜻합니다.
    if trimmed.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("/{}", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.context_path, "/springboot-learning");
    }

    #[test]
    fn reads_host_and_port() {
        let config = config_from(&[("HOST", "127.0.0.1"), ("PORT", "3000")]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn normalizes_context_path() {
        let cases = [
            ("api", "/api"),
            ("/api/", "/api"),
            ("/api/v1", "/api/v1"),
            ("", ""),
            ("/", ""),
        ];
        for (raw, expected) in cases {
            let config = config_from(&[("CONTEXT_PATH", raw)]).unwrap();
            assert_eq!(config.context_path, expected, "input: {:?}", raw);
        }
    }

    #[test]
    fn rejects_context_path_with_query_or_spaces() {
        for raw in ["/a b", "/api?x=1", "/api#frag"] {
            let err = config_from(&[("CONTEXT_PATH", raw)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidContextPath(_)));
        }
    }
}
