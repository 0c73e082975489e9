//! RequiredRoleMiddleware 역할 검사 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::auth::AuthenticatedUser;
use crate::security::{ProtectedOperation, RequestSecurityContext, RoleGate};

/// 실제 역할 검사를 수행하는 서비스
pub struct RequiredRoleMiddlewareService<S> {
    pub service: Rc<S>,
    pub gate: Arc<RoleGate>,
    pub operation: Arc<ProtectedOperation>,
}

impl<S, B> Service<ServiceRequest> for RequiredRoleMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let gate = self.gate.clone();
        let operation = self.operation.clone();

        Box::pin(async move {
            // 인증 계층이 남긴 사용자 정보로 보안 컨텍스트 구성
            let ctx = RequestSecurityContext::new(
                req.extensions().get::<AuthenticatedUser>().cloned()
            );

            if let Err(err) = gate.check(&operation, &ctx) {
                // 거부 자체는 게이트의 error 추적이 기록함
                log::debug!("접근 거부 응답: {} {} (작업: {}): {}",
                    req.method(), req.path(), operation.name(), err);
                let response = err.error_response();
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, response)
                    .map_into_right_body();
                return Ok(res);
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
