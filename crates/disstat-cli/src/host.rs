//! 명령줄에서 지정한 값으로 동작하는 고정 호스트.
//!
//! 실제 봇 프로세스 없이 클라이언트를 구동할 때 사용한다.
//! 디스패치된 이벤트는 `EventBus`로 발행된다.

use disstat_core::event_bus::EventBus;
use disstat_core::models::event::ClientEvent;
use disstat_core::ports::host::BotHost;
use std::time::Duration;

/// 고정 값 호스트
pub struct StaticHost {
    bot_id: Option<u64>,
    guilds: u64,
    /// `Some`이면 members intent가 켜진 것으로 취급
    users: Option<u64>,
    shards: Option<u64>,
    bus: EventBus,
}

impl StaticHost {
    pub fn new(bot_id: Option<u64>, bus: EventBus) -> Self {
        Self {
            bot_id,
            guilds: 0,
            users: None,
            shards: None,
            bus,
        }
    }

    pub fn with_counts(mut self, guilds: u64, users: Option<u64>, shards: Option<u64>) -> Self {
        self.guilds = guilds;
        self.users = users;
        self.shards = shards;
        self
    }
}

impl BotHost for StaticHost {
    fn bot_id(&self) -> Option<u64> {
        self.bot_id
    }

    fn guild_count(&self) -> u64 {
        self.guilds
    }

    fn user_count(&self) -> u64 {
        self.users.unwrap_or(0)
    }

    fn has_members_intent(&self) -> bool {
        self.users.is_some()
    }

    fn shard_count(&self) -> Option<u64> {
        self.shards
    }

    fn latency(&self) -> Duration {
        Duration::ZERO
    }

    fn dispatch(&self, event: ClientEvent) {
        self.bus.publish(event);
    }
}
