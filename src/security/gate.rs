//! 역할 게이트
//!
//! 보호된 작업이 실행되기 전에 현재 사용자가 요구 역할 중 하나 이상을
//! 보유하고 있는지 검사합니다.
//!
//! ## 검사 절차
//!
//! 1. 작업의 요구사항을 결정 (작업 수준 > 그룹 수준 > 제한 없음)
//! 2. 제한이 없으면 즉시 허용
//! 3. 인증된 사용자라면 검사 시작 이벤트(info)
//! 4. 요구 역할 중 사용자가 보유한 역할을 선언 순서대로 수집
//! 5. 하나도 없으면 거부 이벤트(error) 후 `AppError::MissingRole`
//! 6. 있으면 허용 이벤트(debug) 후 통과
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use role_gate::config::SecurityConfig;
//! use role_gate::security::{ProtectedOperation, RoleGate};
//!
//! let gate = RoleGate::new(SecurityConfig::from_env()?);
//! let publish = ProtectedOperation::new("articles.publish").requires(["admin", "editor"]);
//!
//! let article = gate.guard(&publish, &ctx, || article_service.publish(id))?;
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::config::SecurityConfig;
use crate::core::errors::{AppError, AppResult};
use crate::messages::{MessageBundle, DOES_NOT_HAVE_ROLE_UI};

use super::context::SecurityContext;
use super::operation::ProtectedOperation;
use super::requirement::RequiredRole;
use super::trace::{LogTrace, RoleTrace, TRACE_TARGET};

/// 역할 기반 접근 제어 지점
///
/// 생성 이후에는 불변이므로 `Arc`로 감싸 여러 워커에서 공유할 수 있습니다.
pub struct RoleGate {
    config: SecurityConfig,
    bundle: MessageBundle,
    trace: Arc<dyn RoleTrace>,
}

impl RoleGate {
    /// `log` 기반 추적을 사용하는 게이트 생성
    pub fn new(config: SecurityConfig) -> Self {
        let bundle = MessageBundle::new(config.locale);
        Self {
            config,
            bundle,
            trace: Arc::new(LogTrace::new(bundle)),
        }
    }

    /// 추적 이벤트 수신자를 직접 지정하여 게이트 생성
    pub fn with_trace(config: SecurityConfig, trace: Arc<dyn RoleTrace>) -> Self {
        Self {
            bundle: MessageBundle::new(config.locale),
            config,
            trace,
        }
    }

    pub fn config(&self) -> &SecurityConfig {
        &self.config
    }

    /// 작업에 등록된 요구사항으로 현재 사용자를 검사합니다
    pub fn check<C>(&self, operation: &ProtectedOperation, ctx: &C) -> AppResult<()>
    where
        C: SecurityContext + ?Sized,
    {
        self.check_requirement(operation.resolved_requirement(), ctx)
    }

    /// 이미 결정된 요구사항으로 현재 사용자를 검사합니다
    ///
    /// # Errors
    ///
    /// * `AppError::MissingRole` - 요구 역할을 하나도 보유하지 않음
    /// * 보안 컨텍스트가 반환한 에러 (변환 없이 그대로)
    pub fn check_requirement<C>(&self, requirement: &RequiredRole, ctx: &C) -> AppResult<()>
    where
        C: SecurityContext + ?Sized,
    {
        if !self.config.enabled {
            log::debug!(target: TRACE_TARGET, "Role checks disabled, skipping {}", requirement);
            return Ok(());
        }

        if requirement.is_unrestricted() {
            return Ok(());
        }

        let user = ctx.user_id();

        if ctx.is_logged_in() {
            self.trace.verifying(user, requirement);
        }

        let mut granted = Vec::new();
        for role in requirement.iter() {
            if ctx.has_role(role)? {
                granted.push(role.to_string());
            }
        }

        if granted.is_empty() {
            self.trace.denied(user, requirement);
            return Err(AppError::MissingRole {
                roles: requirement.roles().to_vec(),
                message: self.bundle.get(DOES_NOT_HAVE_ROLE_UI, &[requirement]),
            });
        }

        self.trace.granted(user, &granted);
        Ok(())
    }

    /// 검사를 통과한 경우에만 `f`를 실행하고 그 결과를 그대로 반환합니다
    ///
    /// 거부되면 `f`는 호출되지 않으며, 거부 사유는 `From<AppError>`로
    /// 호출자의 에러 타입으로 변환됩니다.
    pub fn guard<C, F, T, E>(&self, operation: &ProtectedOperation, ctx: &C, f: F) -> Result<T, E>
    where
        C: SecurityContext + ?Sized,
        F: FnOnce() -> Result<T, E>,
        E: From<AppError>,
    {
        self.check(operation, ctx)?;
        f()
    }

    /// [`guard`](Self::guard)의 비동기 버전
    ///
    /// 거부되면 `operation_future`는 한 번도 폴링되지 않고 버려집니다.
    pub async fn guard_async<C, Fut, T, E>(
        &self,
        operation: &ProtectedOperation,
        ctx: &C,
        operation_future: Fut,
    ) -> Result<T, E>
    where
        C: SecurityContext + ?Sized,
        Fut: Future<Output = Result<T, E>>,
        E: From<AppError>,
    {
        self.check(operation, ctx)?;
        operation_future.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Locale;
    use crate::security::operation::OperationGroup;
    use std::cell::Cell;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Verifying(Option<String>, Vec<String>),
        Denied(Option<String>, Vec<String>),
        Granted(Option<String>, Vec<String>),
    }

    #[derive(Default)]
    struct RecordingTrace {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingTrace {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl RoleTrace for RecordingTrace {
        fn verifying(&self, user: Option<&str>, required: &RequiredRole) {
            self.events.lock().unwrap().push(Event::Verifying(
                user.map(str::to_string),
                required.roles().to_vec(),
            ));
        }

        fn denied(&self, user: Option<&str>, required: &RequiredRole) {
            self.events.lock().unwrap().push(Event::Denied(
                user.map(str::to_string),
                required.roles().to_vec(),
            ));
        }

        fn granted(&self, user: Option<&str>, granted: &[String]) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Granted(user.map(str::to_string), granted.to_vec()));
        }
    }

    struct StubContext {
        user: Option<String>,
        roles: Vec<String>,
        failure: Option<AppError>,
        role_queries: Cell<usize>,
    }

    impl StubContext {
        fn user(id: &str, roles: &[&str]) -> Self {
            Self {
                user: Some(id.to_string()),
                roles: strings(roles),
                failure: None,
                role_queries: Cell::new(0),
            }
        }

        fn anonymous() -> Self {
            Self {
                user: None,
                roles: Vec::new(),
                failure: None,
                role_queries: Cell::new(0),
            }
        }

        fn failing(error: AppError) -> Self {
            Self {
                failure: Some(error),
                ..Self::user("kim", &["admin"])
            }
        }
    }

    impl SecurityContext for StubContext {
        fn is_logged_in(&self) -> bool {
            self.user.is_some()
        }

        fn user_id(&self) -> Option<&str> {
            self.user.as_deref()
        }

        fn has_role(&self, role: &str) -> AppResult<bool> {
            self.role_queries.set(self.role_queries.get() + 1);
            if let Some(error) = &self.failure {
                return Err(error.clone());
            }
            Ok(self.user.is_some() && self.roles.iter().any(|held| held == role))
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn recording_gate() -> (RoleGate, Arc<RecordingTrace>) {
        let _ = env_logger::builder().is_test(true).try_init();
        let trace = Arc::new(RecordingTrace::default());
        let gate = RoleGate::with_trace(SecurityConfig::default(), trace.clone());
        (gate, trace)
    }

    #[test]
    fn test_partial_match_permits_with_granted_roles() {
        let (gate, trace) = recording_gate();
        let op = ProtectedOperation::new("articles.publish").requires(["admin", "editor"]);
        let ctx = StubContext::user("kim", &["editor"]);

        assert_eq!(gate.check(&op, &ctx), Ok(()));
        assert_eq!(
            trace.events(),
            vec![
                Event::Verifying(Some("kim".to_string()), strings(&["admin", "editor"])),
                Event::Granted(Some("kim".to_string()), strings(&["editor"])),
            ]
        );
    }

    #[test]
    fn test_no_matching_role_denies() {
        let (gate, trace) = recording_gate();
        let op = ProtectedOperation::new("users.delete").requires(["admin"]);
        let ctx = StubContext::user("kim", &[]);

        let err = gate.check(&op, &ctx).unwrap_err();

        assert_eq!(err.missing_roles(), Some(&strings(&["admin"])[..]));
        assert_eq!(
            trace.events(),
            vec![
                Event::Verifying(Some("kim".to_string()), strings(&["admin"])),
                Event::Denied(Some("kim".to_string()), strings(&["admin"])),
            ]
        );
    }

    #[test]
    fn test_unrestricted_permits_without_role_trace() {
        let (gate, trace) = recording_gate();
        let op = ProtectedOperation::new("health");

        for ctx in [
            StubContext::anonymous(),
            StubContext::user("kim", &[]),
            StubContext::user("lee", &["admin", "editor"]),
            StubContext::failing(AppError::InternalError("down".to_string())),
        ] {
            assert_eq!(gate.check(&op, &ctx), Ok(()));
            assert_eq!(ctx.role_queries.get(), 0);
        }
        assert!(trace.events().is_empty());
    }

    #[test]
    fn test_unauthenticated_caller_is_denied_without_info_trace() {
        let (gate, trace) = recording_gate();
        let op = ProtectedOperation::new("users.delete").requires(["admin"]);

        let result = gate.check(&op, &StubContext::anonymous());

        assert!(matches!(result, Err(AppError::MissingRole { ref roles, .. }) if roles == &strings(&["admin"])));
        assert_eq!(trace.events(), vec![Event::Denied(None, strings(&["admin"]))]);
    }

    #[test]
    fn test_granted_roles_are_the_intersection() {
        let cases: [(&[&str], &[&str], &[&str]); 4] = [
            (&["a", "b", "c"], &["c", "a"], &["a", "c"]),
            (&["a"], &["a", "z"], &["a"]),
            (&["x", "y"], &["y"], &["y"]),
            (&["Admin", "admin"], &["admin"], &["admin"]),
        ];

        for (required, held, expected) in cases {
            let (gate, trace) = recording_gate();
            let ctx = StubContext::user("kim", held);

            assert_eq!(gate.check_requirement(&RequiredRole::new(required.iter().copied()), &ctx), Ok(()));
            assert_eq!(
                trace.events().last(),
                Some(&Event::Granted(Some("kim".to_string()), strings(expected)))
            );
        }
    }

    #[test]
    fn test_operation_requirement_overrides_granting_group() {
        let (gate, _trace) = recording_gate();
        let group = OperationGroup::new("reports").requires(["auditor"]).build();
        let op = ProtectedOperation::new("reports.purge")
            .in_group(&group)
            .requires(["admin"]);
        let ctx = StubContext::user("kim", &["auditor"]);

        let err = gate.check(&op, &ctx).unwrap_err();

        assert_eq!(err.missing_roles(), Some(&strings(&["admin"])[..]));
    }

    #[test]
    fn test_group_requirement_applies_when_operation_has_none() {
        let (gate, _trace) = recording_gate();
        let group = OperationGroup::new("reports").requires(["auditor"]).build();
        let op = ProtectedOperation::new("reports.list").in_group(&group);

        assert_eq!(gate.check(&op, &StubContext::user("kim", &["auditor"])), Ok(()));
        assert!(gate.check(&op, &StubContext::user("lee", &["editor"])).is_err());
    }

    #[test]
    fn test_context_errors_pass_through_unchanged() {
        let (gate, trace) = recording_gate();
        let op = ProtectedOperation::new("users.delete").requires(["admin"]);
        let failure = AppError::AuthenticationError("session store unavailable".to_string());

        let result = gate.check(&op, &StubContext::failing(failure.clone()));

        assert_eq!(result, Err(failure));
        assert!(!trace.events().iter().any(|e| matches!(e, Event::Denied(..))));
    }

    #[test]
    fn test_disabled_security_skips_context() {
        let trace = Arc::new(RecordingTrace::default());
        let config = SecurityConfig {
            enabled: false,
            ..SecurityConfig::default()
        };
        let gate = RoleGate::with_trace(config, trace.clone());
        let op = ProtectedOperation::new("users.delete").requires(["admin"]);
        let ctx = StubContext::anonymous();

        assert_eq!(gate.check(&op, &ctx), Ok(()));
        assert_eq!(ctx.role_queries.get(), 0);
        assert!(trace.events().is_empty());
    }

    #[test]
    fn test_denial_message_is_localized() {
        let config = SecurityConfig {
            locale: Locale::PtBr,
            ..SecurityConfig::default()
        };
        let gate = RoleGate::with_trace(config, Arc::new(RecordingTrace::default()));
        let op = ProtectedOperation::new("users.delete").requires(["admin", "owner"]);

        match gate.check(&op, &StubContext::user("kim", &[])) {
            Err(AppError::MissingRole { message, .. }) => {
                assert_eq!(message, "Para acessar este recurso é necessário ser [admin, owner]")
            }
            other => panic!("Expected MissingRole, got {:?}", other),
        }
    }

    #[test]
    fn test_default_gate_logs_and_decides() {
        crate::config::init_logging();
        let gate = RoleGate::new(SecurityConfig::default());
        let op = ProtectedOperation::new("articles.publish").requires(["editor"]);

        assert!(gate.check(&op, &StubContext::user("kim", &["editor"])).is_ok());
        assert!(gate.check(&op, &StubContext::user("lee", &["viewer"])).is_err());
    }

    #[test]
    fn test_guard_runs_operation_only_when_permitted() {
        let (gate, _trace) = recording_gate();
        let op = ProtectedOperation::new("articles.publish").requires(["editor"]);
        let runs = Cell::new(0);

        let permitted: AppResult<u32> = gate.guard(&op, &StubContext::user("kim", &["editor"]), || {
            runs.set(runs.get() + 1);
            Ok(7)
        });
        let denied: AppResult<u32> = gate.guard(&op, &StubContext::user("lee", &[]), || {
            runs.set(runs.get() + 1);
            Ok(7)
        });

        assert_eq!(permitted, Ok(7));
        assert!(matches!(denied, Err(AppError::MissingRole { .. })));
        assert_eq!(runs.get(), 1);
    }

    #[derive(Debug, PartialEq)]
    enum ServiceError {
        Denied(AppError),
        NotFound,
    }

    impl From<AppError> for ServiceError {
        fn from(error: AppError) -> Self {
            ServiceError::Denied(error)
        }
    }

    #[test]
    fn test_guard_returns_operation_result_verbatim() {
        let (gate, _trace) = recording_gate();
        let op = ProtectedOperation::new("articles.archive").requires(["editor"]);
        let ctx = StubContext::user("kim", &["editor"]);

        let unit: Result<(), ServiceError> = gate.guard(&op, &ctx, || Ok(()));
        let failed: Result<(), ServiceError> = gate.guard(&op, &ctx, || Err(ServiceError::NotFound));

        assert_eq!(unit, Ok(()));
        assert_eq!(failed, Err(ServiceError::NotFound));
    }

    #[test]
    fn test_guard_converts_denial_into_caller_error() {
        let (gate, _trace) = recording_gate();
        let op = ProtectedOperation::new("articles.archive").requires(["editor"]);

        let result: Result<(), ServiceError> =
            gate.guard(&op, &StubContext::anonymous(), || Ok(()));

        assert!(matches!(result, Err(ServiceError::Denied(AppError::MissingRole { .. }))));
    }

    #[actix_web::test]
    async fn test_guard_async_does_not_poll_denied_operation() {
        let (gate, _trace) = recording_gate();
        let op = ProtectedOperation::new("reports.export").requires(["auditor"]);
        let polled = Cell::new(false);

        let denied: AppResult<&str> = gate
            .guard_async(&op, &StubContext::user("kim", &[]), async {
                polled.set(true);
                Ok("report")
            })
            .await;
        assert!(denied.is_err());
        assert!(!polled.get());

        let permitted: AppResult<&str> = gate
            .guard_async(&op, &StubContext::user("lee", &["auditor"]), async {
                polled.set(true);
                Ok("report")
            })
            .await;
        assert_eq!(permitted, Ok("report"));
        assert!(polled.get());
    }
}
