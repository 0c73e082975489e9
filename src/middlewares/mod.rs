//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 역할 게이트를 실행하는
//! 미들웨어를 제공합니다. 핸들러를 직접 수정하지 않고 라우트 구성 단계에서
//! 요구 역할을 선언합니다.
//!
//! # 제공 미들웨어
//!
//! ### 역할 검사 미들웨어 (RequiredRoleMiddleware)
//! - 요청 확장의 `AuthenticatedUser`로 보안 컨텍스트 구성
//! - 작업 수준/그룹 수준 요구사항 결정 후 `RoleGate` 검사
//! - 거부 시 403 Forbidden + 지역화된 JSON 메시지
//!
//! # 사용 방법
//!
//! ## 스코프 전체에 적용
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use role_gate::middlewares::RequiredRoleMiddleware;
//!
//! let gate = Arc::new(RoleGate::new(SecurityConfig::from_env()?));
//!
//! App::new()
//!     .service(
//!         web::scope("/api/admin")
//!             .route("/users", web::get().to(list_users))
//!             .wrap(RequiredRoleMiddleware::with_roles(gate.clone(), "admin", ["admin"]))
//!     )
//! ```
//!
//! ## 라우트별 작업 등록
//! ```rust,ignore
//! let reports = OperationGroup::new("reports").requires(["auditor"]).build();
//!
//! App::new()
//!     .service(
//!         web::resource("/reports")
//!             .route(web::get().to(list_reports))
//!             .wrap(RequiredRoleMiddleware::new(
//!                 gate.clone(),
//!                 ProtectedOperation::new("reports.list").in_group(&reports),
//!             ))
//!     )
//!     .service(
//!         web::resource("/reports/purge")
//!             .route(web::delete().to(purge_reports))
//!             .wrap(RequiredRoleMiddleware::new(
//!                 gate.clone(),
//!                 ProtectedOperation::new("reports.purge").in_group(&reports).requires(["admin"]),
//!             ))
//!     )
//! ```

pub mod role_middleware;
mod role_inner;

// 미들웨어 재export
pub use role_middleware::RequiredRoleMiddleware;
