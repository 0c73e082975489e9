//! 보호된 작업과 작업 그룹
//!
//! 요구 역할은 런타임 리플렉션 없이 빌드 시점에 명시적으로 등록합니다.
//! 그룹은 여러 작업이 공유하는 기본 요구사항을 담고, 작업은 자체 요구사항으로
//! 그룹 설정을 덮어쓸 수 있습니다.
//!
//! ```rust,ignore
//! let reports = OperationGroup::new("reports").requires(["auditor"]).build();
//!
//! let list = ProtectedOperation::new("reports.list").in_group(&reports);
//! let purge = ProtectedOperation::new("reports.purge")
//!     .in_group(&reports)
//!     .requires(["admin"]);
//!
//! assert_eq!(list.resolved_requirement().roles(), ["auditor"]);
//! assert_eq!(purge.resolved_requirement().roles(), ["admin"]);
//! ```

use std::sync::Arc;

use super::requirement::RequiredRole;

/// 작업들이 공유하는 요구사항 묶음 (서비스, 컨트롤러, 라우트 스코프 등)
#[derive(Debug, Clone, PartialEq)]
pub struct OperationGroup {
    name: String,
    requirement: RequiredRole,
}

impl OperationGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: RequiredRole::unrestricted(),
        }
    }

    pub fn requires<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.requirement = RequiredRole::new(roles);
        self
    }

    /// 여러 작업이 공유할 수 있도록 `Arc`로 고정
    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirement(&self) -> &RequiredRole {
        &self.requirement
    }
}

/// 역할 검사 대상이 되는 단일 작업
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectedOperation {
    name: String,
    requirement: Option<RequiredRole>,
    group: Option<Arc<OperationGroup>>,
}

impl ProtectedOperation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: None,
            group: None,
        }
    }

    pub fn requires<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.requirement = Some(RequiredRole::new(roles));
        self
    }

    pub fn in_group(mut self, group: &Arc<OperationGroup>) -> Self {
        self.group = Some(Arc::clone(group));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&OperationGroup> {
        self.group.as_deref()
    }

    /// 실제로 적용될 요구사항
    ///
    /// 작업 자체의 요구사항이 비어 있지 않으면 그것이 우선하고,
    /// 그렇지 않으면 그룹의 요구사항, 둘 다 없으면 제한 없음입니다.
    pub fn resolved_requirement(&self) -> &RequiredRole {
        RequiredRole::resolve(
            self.requirement.as_ref(),
            self.group.as_ref().map(|group| group.requirement()),
        )
    }
}
