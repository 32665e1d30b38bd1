//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 호스트 봇 프레임워크, OS 프로세스 조회, 사용자 커스텀 메트릭을
//! `Arc<dyn T>`로 주입받아 `disstat-network` 클라이언트에서 사용한다.
//!
//! 모든 async trait은 `async_trait` 매크로를 사용하여
//! object safety를 보장한다.

pub mod graph_source;
pub mod host;
pub mod monitor;
