//! # Core Module
//!
//! 크레이트 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 권한 거부, 인증 실패, 설정 오류를 표현하는 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! 협력 객체(보안 컨텍스트, 메시지 번들, 설정)는 전역 레지스트리 없이
//! 생성자 인자로 명시적으로 전달합니다.

pub mod errors;

pub use errors::*;
