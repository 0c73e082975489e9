//! # Messages Module
//!
//! 역할 게이트가 남기는 추적 로그와 사용자에게 노출되는 거부 메시지를
//! 로케일별로 제공합니다.
//!
//! ## 메시지 키
//!
//! | 키 | 인자 | 용도 |
//! |----|------|------|
//! | [`HAS_ROLE_VERIFICATION`] | 사용자, 요구 역할 | 검증 시작 (info) |
//! | [`DOES_NOT_HAVE_ROLE`] | 사용자, 요구 역할 | 거부 (error) |
//! | [`DOES_NOT_HAVE_ROLE_UI`] | 요구 역할 | 사용자 노출 거부 메시지 |
//! | [`USER_HAS_ROLE`] | 사용자, 보유 역할 | 허용 (debug) |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use role_gate::messages::{Locale, MessageBundle, RoleList, DOES_NOT_HAVE_ROLE_UI};
//!
//! let bundle = MessageBundle::new(Locale::PtBr);
//! let roles = vec!["admin".to_string()];
//! let text = bundle.get(DOES_NOT_HAVE_ROLE_UI, &[&RoleList(&roles)]);
//! assert_eq!(text, "Para acessar este recurso é necessário ser [admin]");
//! ```

pub mod bundle;

pub use bundle::*;

use std::fmt;

pub const HAS_ROLE_VERIFICATION: &str = "has-role-verification";
pub const DOES_NOT_HAVE_ROLE: &str = "does-not-have-role";
pub const DOES_NOT_HAVE_ROLE_UI: &str = "does-not-have-role-ui";
pub const USER_HAS_ROLE: &str = "user-has-role";

/// 식별자가 없는 호출자를 로그에 표기할 때 사용하는 이름
pub const ANONYMOUS: &str = "anonymous";

/// 지원 로케일
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// BCP 47 스타일 태그를 파싱합니다 (`en`, `en-US`, `pt-BR`, `pt_BR`, `pt`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_lowercase();
        match normalized.as_str() {
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            "pt" | "pt-br" => Some(Locale::PtBr),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }
}

/// 역할 목록을 `[a, b]` 형태로 출력하는 표시 래퍼
pub struct RoleList<'a>(pub &'a [String]);

impl fmt::Display for RoleList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// 선택적 사용자 식별자를 출력하는 표시 래퍼
pub struct UserLabel<'a>(pub Option<&'a str>);

impl fmt::Display for UserLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.unwrap_or(ANONYMOUS))
    }
}
