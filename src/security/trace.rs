//! 역할 검사 추적 이벤트
//!
//! 게이트는 검사 과정에서 세 종류의 이벤트를 남깁니다.
//!
//! | 이벤트 | 레벨 | 시점 |
//! |--------|------|------|
//! | `verifying` | info | 인증된 사용자에 대해 검사를 시작할 때 |
//! | `denied` | error | 요구 역할을 하나도 보유하지 않았을 때 |
//! | `granted` | debug | 보유한 요구 역할이 하나 이상일 때 |
//!
//! 이벤트는 제어 흐름에 영향을 주지 않습니다.

use crate::messages::{
    MessageBundle, RoleList, UserLabel, DOES_NOT_HAVE_ROLE, HAS_ROLE_VERIFICATION, USER_HAS_ROLE,
};

use super::requirement::RequiredRole;

/// 로그 타겟
pub const TRACE_TARGET: &str = "role_gate";

/// 역할 검사 이벤트 수신자
pub trait RoleTrace: Send + Sync {
    /// 검사 시작: 사용자와 요구 역할 전체
    fn verifying(&self, user: Option<&str>, required: &RequiredRole);

    /// 거부: 사용자와 요구 역할 전체
    fn denied(&self, user: Option<&str>, required: &RequiredRole);

    /// 허용: 사용자와 실제로 보유한 요구 역할
    fn granted(&self, user: Option<&str>, granted: &[String]);
}

/// `log` 파사드로 지역화된 메시지를 남기는 기본 구현
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace {
    bundle: MessageBundle,
}

impl LogTrace {
    pub fn new(bundle: MessageBundle) -> Self {
        Self { bundle }
    }
}

impl RoleTrace for LogTrace {
    fn verifying(&self, user: Option<&str>, required: &RequiredRole) {
        log::info!(
            target: TRACE_TARGET,
            "{}",
            self.bundle.get(HAS_ROLE_VERIFICATION, &[&UserLabel(user), required])
        );
    }

    fn denied(&self, user: Option<&str>, required: &RequiredRole) {
        log::error!(
            target: TRACE_TARGET,
            "{}",
            self.bundle.get(DOES_NOT_HAVE_ROLE, &[&UserLabel(user), required])
        );
    }

    fn granted(&self, user: Option<&str>, granted: &[String]) {
        // debug 비활성 시 포맷 비용 생략
        if log::log_enabled!(target: TRACE_TARGET, log::Level::Debug) {
            log::debug!(
                target: TRACE_TARGET,
                "{}",
                self.bundle.get(USER_HAS_ROLE, &[&UserLabel(user), &RoleList(granted)])
            );
        }
    }
}
