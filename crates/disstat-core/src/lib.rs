//! # disstat-core
//!
//! DisStat 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 전송 페이로드/이벤트 구조체 (serde Serialize/Deserialize)
//! - [`ports`]: 호스트 봇, 프로세스 샘플러, 커스텀 그래프 소스 포트 (async_trait)
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 클라이언트 설정 구조체
//! - [`config_manager`]: 설정 파일 관리 (로드/저장)
//! - [`event_bus`]: 호스트용 broadcast 이벤트 버스

pub mod config;
pub mod config_manager;
pub mod error;
pub mod event_bus;
pub mod models;
pub mod ports;

/// DisStat API 기본 URL
pub const BASE_URL: &str = "https://disstat-api.tomatenkuchen.com/v1";
