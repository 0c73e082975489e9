//! # Application Error Handling System
//!
//! 역할 게이트와 미들웨어가 공유하는 통합 에러 타입입니다.
//! 서비스 계층에서는 `AppResult<T>`로 전파하고, Actix-Web 경계에서는
//! `ResponseError` 구현을 통해 JSON 응답으로 자동 변환됩니다.
//!
//! ## 설계 원칙
//!
//! - **단일 거부 사유**: 권한 검사 실패는 항상 `MissingRole` 하나로 표현됩니다.
//!   요구 역할 목록과 사용자에게 보여줄 지역화된 메시지를 함께 운반합니다.
//! - **투명한 전파**: `SecurityContext` 구현체가 돌려준 에러는 감싸지 않고
//!   그대로 호출자에게 전달됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use role_gate::core::errors::{AppError, AppResult};
//!
//! fn delete_report(gate: &RoleGate, ctx: &impl SecurityContext) -> AppResult<()> {
//!     gate.check(&DELETE_REPORT, ctx)?; // 권한 부족 시 MissingRole 반환
//!     // ... 실제 비즈니스 로직
//!     Ok(())
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `AuthenticationError` | 401 Unauthorized | 인증 정보 조회 실패 |
//! | `MissingRole` | 403 Forbidden | 요구 역할 중 어느 것도 보유하지 않음 |
//! | `ConfigError` | 500 Internal Server Error | 잘못된 보안 설정값 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를
/// 구현하여 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 현재 사용자가 요구 역할 중 어느 것도 보유하지 않음
    ///
    /// `roles`는 선언된 요구 역할 전체(선언 순서 유지),
    /// `message`는 사용자에게 노출할 지역화된 문구입니다.
    #[error("Authorization error: {message}")]
    MissingRole {
        roles: Vec<String>,
        message: String,
    },

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 권한 부족 에러인 경우 요구 역할 목록을 반환
    pub fn missing_roles(&self) -> Option<&[String]> {
        match self {
            AppError::MissingRole { roles, .. } => Some(roles),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingRole { .. } => "insufficient_permissions",
            AppError::AuthenticationError(_) => "authentication_required",
            AppError::ConfigError(_) => "configuration_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingRole { .. } => StatusCode::FORBIDDEN,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 거부 응답에는 내부 포맷 대신 지역화된 메시지만 노출
        let message = match self {
            AppError::MissingRole { message, .. } => message.clone(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.error_code(),
                "message": message
            }))
    }
}

/// 애플리케이션 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
