//! 로케일별 메시지 카탈로그

use std::collections::HashMap;
use std::fmt::{Display, Write};

use once_cell::sync::Lazy;

use super::{Locale, DOES_NOT_HAVE_ROLE, DOES_NOT_HAVE_ROLE_UI, HAS_ROLE_VERIFICATION, USER_HAS_ROLE};

type Catalogue = HashMap<&'static str, &'static str>;

static EN: Lazy<Catalogue> = Lazy::new(|| {
    HashMap::from([
        (HAS_ROLE_VERIFICATION, "Checking whether user {0} holds any of the roles {1}"),
        (DOES_NOT_HAVE_ROLE, "User {0} holds none of the roles {1}"),
        (DOES_NOT_HAVE_ROLE_UI, "Access to this resource requires one of the roles {0}"),
        (USER_HAS_ROLE, "User {0} holds the roles {1}"),
    ])
});

static PT_BR: Lazy<Catalogue> = Lazy::new(|| {
    HashMap::from([
        (HAS_ROLE_VERIFICATION, "Verificando se o usuário {0} possui a(s) role(s): {1}"),
        (DOES_NOT_HAVE_ROLE, "Usuário {0} não possui a(s) role(s): {1}"),
        (DOES_NOT_HAVE_ROLE_UI, "Para acessar este recurso é necessário ser {0}"),
        (USER_HAS_ROLE, "Usuário {0} possui a(s) role(s): {1}"),
    ])
});

/// 로케일이 고정된 메시지 번들
///
/// 카탈로그는 프로세스 전역에서 한 번만 만들어지며, 번들 자체는 로케일 값만 가지므로
/// 복제 비용이 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MessageBundle {
    locale: Locale,
}

impl MessageBundle {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// 키에 해당하는 메시지를 위치 인자(`{0}`, `{1}`, ...)로 채워 반환합니다
    ///
    /// 현재 로케일에 키가 없으면 영어 카탈로그를 조회하고,
    /// 그래도 없으면 `???key???`를 반환합니다.
    pub fn get(&self, key: &str, args: &[&dyn Display]) -> String {
        let template = self
            .catalogue()
            .get(key)
            .or_else(|| EN.get(key))
            .copied();

        let Some(template) = template else {
            log::warn!("Missing message key '{}' for locale {}", key, self.locale.tag());
            return format!("???{}???", key);
        };

        format_positional(template, args)
    }

    fn catalogue(&self) -> &'static Catalogue {
        match self.locale {
            Locale::En => &EN,
            Locale::PtBr => &PT_BR,
        }
    }
}

/// 템플릿을 한 번만 훑으며 `{N}`을 `args[N]`으로 치환
///
/// 인자 문자열은 다시 검사하지 않으므로 인자 안의 `{N}`은 그대로 남습니다.
/// 해당 인자가 없거나 숫자가 아닌 중괄호는 원문 그대로 출력합니다.
fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let placeholder = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            args.get(index).map(|arg| (close, arg))
        });

        match placeholder {
            Some((close, arg)) => {
                let _ = write!(text, "{}", arg);
                rest = &after[close + 1..];
            }
            None => {
                text.push('{');
                rest = after;
            }
        }
    }

    text.push_str(rest);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{RoleList, UserLabel};

    #[test]
    fn test_english_messages() {
        let bundle = MessageBundle::new(Locale::En);
        let roles = vec!["admin".to_string(), "editor".to_string()];

        assert_eq!(
            bundle.get(HAS_ROLE_VERIFICATION, &[&UserLabel(Some("kim")), &RoleList(&roles)]),
            "Checking whether user kim holds any of the roles [admin, editor]"
        );
        assert_eq!(
            bundle.get(DOES_NOT_HAVE_ROLE_UI, &[&RoleList(&roles)]),
            "Access to this resource requires one of the roles [admin, editor]"
        );
    }

    #[test]
    fn test_portuguese_messages() {
        let bundle = MessageBundle::new(Locale::PtBr);
        let roles = vec!["admin".to_string()];

        assert_eq!(
            bundle.get(DOES_NOT_HAVE_ROLE, &[&UserLabel(None), &RoleList(&roles)]),
            "Usuário anonymous não possui a(s) role(s): [admin]"
        );
        assert_eq!(
            bundle.get(USER_HAS_ROLE, &[&UserLabel(Some("ana")), &RoleList(&roles)]),
            "Usuário ana possui a(s) role(s): [admin]"
        );
    }

    #[test]
    fn test_missing_key() {
        let bundle = MessageBundle::default();

        assert_eq!(bundle.get("no-such-key", &[]), "???no-such-key???");
    }

    #[test]
    fn test_unused_placeholders_are_kept() {
        let bundle = MessageBundle::new(Locale::En);

        assert_eq!(
            bundle.get(USER_HAS_ROLE, &[&"kim"]),
            "User kim holds the roles {1}"
        );
    }

    #[test]
    fn test_argument_text_is_not_rescanned() {
        let bundle = MessageBundle::new(Locale::En);
        let roles = vec!["admin".to_string()];

        assert_eq!(
            bundle.get(DOES_NOT_HAVE_ROLE, &[&UserLabel(Some("eve{1}")), &RoleList(&roles)]),
            "User eve{1} holds none of the roles [admin]"
        );
        assert_eq!(
            bundle.get(USER_HAS_ROLE, &[&UserLabel(Some("kim")), &"{0}{x}{"]),
            "User kim holds the roles {0}{x}{"
        );
    }
}
