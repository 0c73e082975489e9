//! # Domain Layer Module
//!
//! 역할 게이트가 다루는 요청 범위 도메인 타입을 정의합니다.
//!
//! ## 모듈 구성
//!
//! ### [`auth`] - 인증된 사용자
//!
//! 호스트의 인증 계층(토큰 검증, 세션 조회 등)이 요청 확장(extensions)에 넣어 두는
//! 사용자 정보와 이를 핸들러에서 꺼내는 추출자(extractor)입니다.
//! 토큰 자체의 파싱과 검증은 이 크레이트의 관심사가 아닙니다.

pub mod auth;
