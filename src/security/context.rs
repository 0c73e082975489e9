//! 보안 컨텍스트 (신원/역할 조회 오라클)

use crate::core::errors::AppResult;
use crate::domain::auth::AuthenticatedUser;

/// 현재 호출자의 신원과 역할 보유 여부를 알려주는 외부 협력 객체
///
/// 역할 저장소, 세션, 토큰 검증은 구현체의 책임입니다.
/// 구현체가 돌려주는 에러는 게이트가 감싸지 않고 그대로 전파합니다.
pub trait SecurityContext {
    /// 인증된 사용자가 있는지 여부
    fn is_logged_in(&self) -> bool;

    /// 인증된 사용자의 식별자 (미인증이면 `None`)
    fn user_id(&self) -> Option<&str>;

    /// 현재 사용자가 주어진 역할을 보유하는지 여부
    ///
    /// 미인증 호출자에 대해서는 `Ok(false)`를 반환해야 합니다.
    fn has_role(&self, role: &str) -> AppResult<bool>;
}

/// 요청 확장에 저장된 [`AuthenticatedUser`] 기반 보안 컨텍스트
#[derive(Debug, Clone, Default)]
pub struct RequestSecurityContext {
    user: Option<AuthenticatedUser>,
}

impl RequestSecurityContext {
    pub fn new(user: Option<AuthenticatedUser>) -> Self {
        Self { user }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }
}

impl From<AuthenticatedUser> for RequestSecurityContext {
    fn from(user: AuthenticatedUser) -> Self {
        Self::new(Some(user))
    }
}

impl SecurityContext for RequestSecurityContext {
    fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.user_id.as_str())
    }

    fn has_role(&self, role: &str) -> AppResult<bool> {
        Ok(self.user.as_ref().is_some_and(|user| user.has_role(role)))
    }
}
