//! # disstat-network
//!
//! DisStat REST API 어댑터.
//! API 키 인증 세션으로 봇 조회, 통계 스냅샷 전송, 커스텀 그래프/커맨드 이벤트 전송을
//! 담당하며, 주기적으로 메트릭을 수집해 전송하는 자동 전송 루프를 제공한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use disstat_core::config::ClientConfig;
//! use disstat_network::DisstatClient;
//!
//! let client = Arc::new(DisstatClient::new(ClientConfig::new(api_key), host));
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let handle = client.clone().start_auto_post(shutdown_rx);
//! client.post_command("ping", invoker_id, guild_id).await;
//! ```

mod auto_post;
pub mod client;
mod response;

pub use client::DisstatClient;
