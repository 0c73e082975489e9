//! 역할 검사 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 [`RoleGate`]를 실행합니다.
//! 사용자 정보는 앞단의 인증 계층이 요청 확장에 넣어 둔 [`AuthenticatedUser`]를 사용합니다.
//!
//! [`AuthenticatedUser`]: crate::domain::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::role_inner::RequiredRoleMiddlewareService;
use crate::security::{ProtectedOperation, RoleGate};

/// 역할 검사 미들웨어
pub struct RequiredRoleMiddleware {
    /// 공유 역할 게이트
    gate: Arc<RoleGate>,
    /// 이 라우트가 보호하는 작업 (요구사항 포함)
    operation: Arc<ProtectedOperation>,
}

impl RequiredRoleMiddleware {
    /// 등록된 작업으로 미들웨어 생성
    pub fn new(gate: Arc<RoleGate>, operation: ProtectedOperation) -> Self {
        Self {
            gate,
            operation: Arc::new(operation),
        }
    }

    /// 복수 역할 중 하나 요구 미들웨어 생성
    pub fn with_roles<I, R>(gate: Arc<RoleGate>, name: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self::new(gate, ProtectedOperation::new(name).requires(roles))
    }

    pub fn operation(&self) -> &ProtectedOperation {
        &self.operation
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RequiredRoleMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequiredRoleMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequiredRoleMiddlewareService {
            service: Rc::new(service),
            gate: self.gate.clone(),
            operation: self.operation.clone(),
        }))
    }
}
