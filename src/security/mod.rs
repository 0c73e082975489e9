//! # Security Module
//!
//! 보호된 작업 실행 전에 요구 역할을 검사하는 역할 게이트와 그 협력 타입입니다.
//!
//! ## 구성
//!
//! - [`requirement`] - 요구 역할 목록 ([`RequiredRole`])과 결정 규칙
//! - [`operation`] - 빌드 시점에 요구사항을 등록하는 [`ProtectedOperation`], [`OperationGroup`]
//! - [`context`] - 신원/역할 조회 오라클 [`SecurityContext`]
//! - [`trace`] - 검사 이벤트 수신자 [`RoleTrace`]
//! - [`gate`] - 검사와 데코레이터를 제공하는 [`RoleGate`]
//!
//! ## 흐름
//!
//! ```text
//! 호출자 ──▶ RoleGate::guard(op, ctx, f)
//!               │  op.resolved_requirement()
//!               │  ctx.is_logged_in() / ctx.has_role(..)
//!               │  RoleTrace (info / error / debug)
//!               ├── 거부 ──▶ Err(AppError::MissingRole)
//!               └── 허용 ──▶ f() 결과 그대로 반환
//! ```

pub mod context;
pub mod gate;
pub mod operation;
pub mod requirement;
pub mod trace;

pub use context::{RequestSecurityContext, SecurityContext};
pub use gate::RoleGate;
pub use operation::{OperationGroup, ProtectedOperation};
pub use requirement::RequiredRole;
pub use trace::{LogTrace, RoleTrace};
