//! 요구 역할 정의

use std::fmt;

use crate::messages::RoleList;

/// 보호된 작업을 실행하는 데 필요한 역할 목록
///
/// 목록 중 하나만 보유해도 충분합니다 (OR 조건).
/// 빈 목록은 "제한 없음"을 의미합니다. 선언 순서가 그대로 보존되며,
/// 역할 비교는 대소문자를 구분하는 정확한 문자열 일치입니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequiredRole(Vec<String>);

/// 어디에도 요구 역할이 선언되지 않은 경우 사용되는 공용 값
pub(crate) static UNRESTRICTED: RequiredRole = RequiredRole(Vec::new());

impl RequiredRole {
    pub fn new<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self(roles.into_iter().map(Into::into).collect())
    }

    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    pub fn roles(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// 작업 수준 요구사항이 비어 있지 않으면 그것을, 아니면 그룹 수준 요구사항을 선택
    pub fn resolve<'a>(
        operation: Option<&'a RequiredRole>,
        group: Option<&'a RequiredRole>,
    ) -> &'a RequiredRole {
        match (operation, group) {
            (Some(own), _) if !own.is_unrestricted() => own,
            (_, Some(inherited)) => inherited,
            _ => &UNRESTRICTED,
        }
    }
}

impl fmt::Display for RequiredRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&RoleList(&self.0), f)
    }
}

impl<R: Into<String>> FromIterator<R> for RequiredRole {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_unrestricted() {
        assert!(RequiredRole::unrestricted().is_unrestricted());
        assert!(RequiredRole::new(Vec::<String>::new()).is_unrestricted());
        assert!(!RequiredRole::new(["admin"]).is_unrestricted());
    }

    #[test]
    fn test_declared_order_is_kept() {
        let required: RequiredRole = ["editor", "admin", "editor"].into_iter().collect();

        assert_eq!(required.roles(), &roles(&["editor", "admin", "editor"])[..]);
        assert_eq!(required.to_string(), "[editor, admin, editor]");
    }

    #[test]
    fn test_resolve_prefers_operation_level() {
        let own = RequiredRole::new(["admin"]);
        let inherited = RequiredRole::new(["user"]);

        assert_eq!(RequiredRole::resolve(Some(&own), Some(&inherited)), &own);
    }

    #[test]
    fn test_resolve_falls_back_to_group() {
        let empty = RequiredRole::unrestricted();
        let inherited = RequiredRole::new(["user"]);

        assert_eq!(RequiredRole::resolve(Some(&empty), Some(&inherited)), &inherited);
        assert_eq!(RequiredRole::resolve(None, Some(&inherited)), &inherited);
    }

    #[test]
    fn test_resolve_without_any_declaration() {
        let empty = RequiredRole::unrestricted();

        assert!(RequiredRole::resolve(None, None).is_unrestricted());
        assert!(RequiredRole::resolve(Some(&empty), None).is_unrestricted());
    }
}
