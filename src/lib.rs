//! 역할 게이트 (Role Gate)
//!
//! 보호된 서비스 작업이 실행되기 전에 현재 사용자가 요구 역할 중
//! 하나 이상을 보유하고 있는지 검사하는 정책 집행 지점입니다.
//! 명시적 데코레이터(`RoleGate::guard`)와 Actix-web 미들웨어 두 가지 방식으로
//! 적용할 수 있습니다.
//!
//! # Features
//!
//! - **빌드 시점 등록**: 작업/그룹 단위 요구 역할을 코드로 선언
//! - **OR 의미론**: 요구 역할 중 하나만 보유해도 허용
//! - **추적 이벤트**: 검사 시작(info), 거부(error), 허용(debug)
//! - **지역화 메시지**: `en`, `pt-BR` 거부 메시지
//! - **Actix-web 통합**: 403 JSON 응답을 돌려주는 미들웨어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← RequiredRoleMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    RoleGate     │ ← 요구사항 결정 + 역할 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SecurityContext │ ← 신원/역할 조회 (외부)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use role_gate::config::SecurityConfig;
//! use role_gate::security::{ProtectedOperation, RequestSecurityContext, RoleGate};
//!
//! let gate = RoleGate::new(SecurityConfig::from_env()?);
//! let publish = ProtectedOperation::new("articles.publish").requires(["admin", "editor"]);
//!
//! let ctx = RequestSecurityContext::from(user);
//! let article = gate.guard(&publish, &ctx, || article_service.publish(id))?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod messages;
pub mod security;
pub mod middlewares;
