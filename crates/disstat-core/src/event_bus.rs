//! 클라이언트 이벤트 버스.
//!
//! `tokio::broadcast` 기반. 호스트가 `BotHost::dispatch` 구현에 사용한다.

use tokio::sync::broadcast;
use tracing::debug;

use crate::models::event::ClientEvent;

/// 클라이언트 이벤트 버스
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ClientEvent>,
}

impl EventBus {
    /// 새 이벤트 버스 생성
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 이벤트 발행 (구독자가 없으면 버림)
    pub fn publish(&self, event: ClientEvent) {
        debug!("이벤트 발행: {}", event.name());
        let _ = self.tx.send(event);
    }

    /// 구독자 생성
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::CustomGraphEntry;
    use crate::models::stats::StatsPayload;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ClientEvent::StatsPosted(StatsPayload::default()));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name(), "stats-posted");
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ClientEvent::CommandPosted(CustomGraphEntry::command(
            "ping", 1, None,
        )));

        assert!(matches!(
            rx1.recv().await.unwrap(),
            ClientEvent::CommandPosted(_)
        ));
        assert!(matches!(
            rx2.recv().await.unwrap(),
            ClientEvent::CommandPosted(_)
        ));
    }

    #[test]
    fn publish_without_subscribers_is_noop() {
        let bus = EventBus::default();
        bus.publish(ClientEvent::StatsPosted(StatsPayload::default()));
    }
}
