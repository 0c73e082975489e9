//! 보안 검사 설정
//!
//! 역할 게이트 전체의 활성화 여부와 거부/추적 메시지에 사용할 로케일을 정의합니다.

use std::env;

use crate::core::errors::{AppError, AppResult};
use crate::messages::Locale;

/// 역할 검사 on/off 환경 변수
pub const SECURITY_ENABLED_VAR: &str = "SECURITY_ENABLED";

/// 메시지 로케일 환경 변수
pub const SECURITY_MESSAGE_LOCALE_VAR: &str = "SECURITY_MESSAGE_LOCALE";

/// 역할 게이트 설정
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityConfig {
    /// false면 게이트가 보안 컨텍스트를 조회하지 않고 모든 호출을 허용
    pub enabled: bool,

    /// 메시지 번들 로케일
    pub locale: Locale,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locale: Locale::default(),
        }
    }
}

impl SecurityConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로부터 설정을 구성합니다
    ///
    /// 값이 없으면 기본값을 사용하고, 불리언 값이 잘못된 경우 `ConfigError`를 반환합니다.
    /// 알 수 없는 로케일은 경고를 남기고 기본 로케일로 대체합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let enabled = match lookup(SECURITY_ENABLED_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "{} must be a boolean, got '{}'",
                    SECURITY_ENABLED_VAR, raw
                ))
            })?,
            None => defaults.enabled,
        };

        let locale = match lookup(SECURITY_MESSAGE_LOCALE_VAR) {
            Some(tag) => Locale::from_tag(&tag).unwrap_or_else(|| {
                log::warn!(
                    "Unsupported {} '{}', falling back to {}",
                    SECURITY_MESSAGE_LOCALE_VAR,
                    tag,
                    defaults.locale.tag()
                );
                defaults.locale
            }),
            None => defaults.locale,
        };

        if !enabled {
            log::warn!("Role checks are disabled ({}=false)", SECURITY_ENABLED_VAR);
        }

        Ok(Self { enabled, locale })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
