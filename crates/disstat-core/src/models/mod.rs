//! DisStat 도메인 모델.
//!
//! 클라이언트-서버 간 전송하는 데이터 구조체와 호스트에 전달하는 이벤트를 정의한다.
//! 모든 전송 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod event;
pub mod graph;
pub mod process;
pub mod query;
pub mod stats;
