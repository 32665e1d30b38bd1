//! 통합 테스트 공용 목 객체.

#![allow(dead_code)]

use async_trait::async_trait;
use disstat_core::config::ClientConfig;
use disstat_core::error::CoreError;
use disstat_core::models::event::ClientEvent;
use disstat_core::models::process::ProcessMemory;
use disstat_core::ports::host::BotHost;
use disstat_core::ports::monitor::ProcessSampler;
use disstat_network::DisstatClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BOT_ID: u64 = 123;
pub const API_KEY: &str = "test-key";

/// 설정 가능한 호스트 봇: 디스패치된 이벤트를 기록
pub struct RecordingHost {
    pub bot_id: Option<u64>,
    pub guilds: u64,
    pub users: u64,
    pub members_intent: bool,
    pub shards: Option<u64>,
    pub latency: Duration,
    pub events: Mutex<Vec<ClientEvent>>,
}

impl RecordingHost {
    /// 로그인 완료, members intent 없음, 샤딩 없음, 지연 0
    pub fn minimal(guilds: u64) -> Self {
        Self {
            bot_id: Some(BOT_ID),
            guilds,
            users: 0,
            members_intent: false,
            shards: None,
            latency: Duration::ZERO,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ClientEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BotHost for RecordingHost {
    fn bot_id(&self) -> Option<u64> {
        self.bot_id
    }

    fn guild_count(&self) -> u64 {
        self.guilds
    }

    fn user_count(&self) -> u64 {
        self.users
    }

    fn has_members_intent(&self) -> bool {
        self.members_intent
    }

    fn shard_count(&self) -> Option<u64> {
        self.shards
    }

    fn latency(&self) -> Duration {
        self.latency
    }

    fn dispatch(&self, event: ClientEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// 고정 값을 반환하는 샘플러. `memory_denied`이면 권한 거부를 흉내낸다.
pub struct FakeSampler {
    pub cpu: f64,
    pub memory_denied: bool,
}

impl FakeSampler {
    pub fn permitted(cpu: f64) -> Self {
        Self {
            cpu,
            memory_denied: false,
        }
    }

    pub fn denied(cpu: f64) -> Self {
        Self {
            cpu,
            memory_denied: true,
        }
    }
}

#[async_trait]
impl ProcessSampler for FakeSampler {
    async fn cpu_usage(&self) -> Result<f64, CoreError> {
        Ok(self.cpu)
    }

    async fn memory(&self) -> Result<ProcessMemory, CoreError> {
        if self.memory_denied {
            return Err(CoreError::PermissionDenied("AccessDenied".to_string()));
        }
        Ok(ProcessMemory {
            uss: 1_000,
            rss: 4_000,
        })
    }
}

/// 목 서버를 가리키는 클라이언트
pub fn client_for(
    server: &mockito::ServerGuard,
    host: Arc<RecordingHost>,
    sampler: FakeSampler,
) -> DisstatClient {
    let config = ClientConfig::new(API_KEY).with_base_url(server.url());
    DisstatClient::new(config, host).with_sampler(Arc::new(sampler))
}
