//! 인증 도메인 모델

pub mod authenticated_user;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
