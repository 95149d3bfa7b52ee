//! # 서비스 계층 모듈
//!
//! HTTP와 무관한 비즈니스 로직을 모아둔 모듈입니다.
//! 핸들러(routes)는 요청을 해석하고, 실제 문자열 생성은 여기서 담당합니다.
//!
//! - `greeting`: 인사말/상태 메시지 생성

pub mod greeting;

pub use greeting::*;
