//! # 인사말(Greeting) 서비스
//!
//! 인사말 문자열과 애플리케이션 상태 문자열을 만들어 주는 순수 함수들의 모음입니다.
//!
//! 이 모듈의 항목:
//! - `GreetingService::greeting()`: 이름을 받아 인사말 생성
//! - `GreetingService::status()`: 고정된 상태 메시지 반환
//! - `DEFAULT_NAME`: 이름이 주어지지 않았을 때 사용할 기본값
//!
//! 두 함수 모두 공유 상태를 건드리지 않으므로, 여러 요청이 동시에 호출해도
//! 락(lock)이나 동기화가 필요 없습니다.

/// `name` 쿼리 파라미터가 없거나 비어 있을 때 사용하는 기본 이름
pub const DEFAULT_NAME: &str = "User";

/// `status()`가 항상 반환하는 상태 메시지
pub const STATUS_MESSAGE: &str = "Application is running successfully!";

/// 인사말과 상태 메시지를 만드는 서비스
///
/// 필드가 없는 **유닛 구조체(unit struct)**입니다.
/// 상태가 없으므로 `Copy`까지 derive할 수 있고, 복제 비용은 0입니다.
///
/// 서버 시작 시 `main()`에서 직접 생성해 `AppState`에 넣어 둡니다.
/// 런타임 리플렉션 없이, 생성자를 통해 명시적으로 주입하는 방식입니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingService;

impl GreetingService {
    /// 새 서비스 인스턴스를 생성합니다.
    ///
    /// `const fn`이므로 상수 문맥에서도 만들 수 있습니다.
    pub const fn new() -> Self {
        Self
    }

    /// 주어진 이름으로 인사말을 만듭니다.
    ///
    /// 입력 검증이나 이스케이프를 하지 않습니다.
    /// 빈 문자열, 특수문자, 한글 등 어떤 문자열이 와도 그대로 끼워 넣습니다.
    ///
    /// # 예시
    /// ```
    /// use greeting_service::services::GreetingService;
    ///
    /// let greetings = GreetingService::new();
    /// assert_eq!(
    ///     greetings.greeting("John"),
    ///     "Hello, John! Welcome to Spring Boot Learning."
    /// );
    /// ```
    pub fn greeting(&self, name: &str) -> String {
        format!("Hello, {}! Welcome to Spring Boot Learning.", name)
    }

    /// 애플리케이션 상태 메시지를 반환합니다.
    ///
    /// 반환 타입이 `&'static str`인 이유: 프로그램 바이너리에 박혀 있는 상수를
    /// 빌려주기만 하므로 매번 `String`을 새로 할당할 필요가 없습니다.
    pub fn status(&self) -> &'static str {
        STATUS_MESSAGE
    }
}

// #[cfg(test)]: `cargo test`로 빌드할 때만 컴파일되는 모듈입니다.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_has_exact_format() {
        let greetings = GreetingService::new();
        let result = greetings.greeting("John");

        assert!(result.contains("Hello"));
        assert!(result.contains("John"));
        assert_eq!(result, "Hello, John! Welcome to Spring Boot Learning.");
    }

    #[test]
    fn greeting_contains_each_name() {
        let greetings = GreetingService::new();
        for name in ["Alice", "Bob", "Charlie"] {
            let result = greetings.greeting(name);
            assert!(result.contains("Hello"));
            assert!(result.contains(name));
        }
    }

    #[test]
    fn greeting_echoes_unusual_input_unmodified() {
        let greetings = GreetingService::default();
        for name in ["", " ", "<script>", "김철수", "a&b=c", "line\nbreak"] {
            assert_eq!(
                greetings.greeting(name),
                format!("Hello, {}! Welcome to Spring Boot Learning.", name)
            );
        }
    }

    #[test]
    fn greeting_is_deterministic() {
        let greetings = GreetingService::new();
        assert_eq!(greetings.greeting("Spring"), greetings.greeting("Spring"));
    }

    #[test]
    fn status_is_constant() {
        let greetings = GreetingService::new();
        let status = greetings.status();

        assert!(!status.is_empty());
        assert!(status.contains("running"));
        assert_eq!(status, "Application is running successfully!");
        assert_eq!(status, GreetingService::default().status());
    }
}
