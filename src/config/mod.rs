//! # Configuration Module
//!
//! 역할 게이트의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 읽고, 프로필별 `.env` 파일 로드와
//! 로깅 초기화 같은 호스트 애플리케이션 부트스트랩 도우미를 함께 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`security_config`] - 보안 검사 활성화 여부, 메시지 로케일
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod 선택, 미설정 시 .env)
//! export PROFILE="dev"
//!
//! # 보안 설정
//! export SECURITY_ENABLED="true"          # false면 모든 역할 검사를 건너뜀
//! export SECURITY_MESSAGE_LOCALE="pt-BR"  # en (기본값), pt-BR
//!
//! # 로깅
//! export RUST_LOG="info,role_gate=debug"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use role_gate::config::{init_logging, load_env_file, SecurityConfig};
//!
//! load_env_file();
//! init_logging();
//!
//! let config = SecurityConfig::from_env()?;
//! ```

pub mod security_config;

pub use security_config::*;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 미설정 또는 기타 - 기본 .env 파일 로드
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").ok();

    info!("Current profile: {}", profile.as_deref().unwrap_or("(default)"));

    match profile_env_file(profile.as_deref()) {
        Some(filename) => match dotenv::from_filename(filename) {
            Ok(_) => info!("{} 파일 로드 됨", filename),
            Err(e) => error!("{} 파일 로드 실패: {}", filename, e),
        },
        None => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 프로필 전용 .env 파일 이름 (`None`이면 기본 .env 사용)
fn profile_env_file(profile: Option<&str>) -> Option<&'static str> {
    match profile {
        Some("prod") => Some(".env.prod"),
        Some("dev") => Some(".env.dev"),
        _ => None,
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
/// 이미 로거가 설치된 경우에는 조용히 무시합니다.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info,actix_web=debug"))
        .try_init();
}
