//! 호스트 봇 포트.
//!
//! 구현: 클라이언트를 내장하는 봇 프레임워크 쪽 어댑터

use std::time::Duration;

use crate::models::event::ClientEvent;

/// 호스트 봇: 식별자, 길드/유저/샤드 정보, 이벤트 디스패치 제공
pub trait BotHost: Send + Sync {
    /// 봇 자신의 ID (로그인 전이면 `None`)
    fn bot_id(&self) -> Option<u64>;

    /// 현재 길드 수
    fn guild_count(&self) -> u64;

    /// 캐시된 유저 수
    fn user_count(&self) -> u64;

    /// privileged `members` intent 활성화 여부
    fn has_members_intent(&self) -> bool;

    /// 샤드 수 (샤딩하지 않으면 `None`)
    fn shard_count(&self) -> Option<u64>;

    /// 게이트웨이 지연 (측정 전이면 0)
    fn latency(&self) -> Duration;

    /// 클라이언트 이벤트 전달
    fn dispatch(&self, event: ClientEvent);
}
