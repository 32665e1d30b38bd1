//! 통계 스냅샷 페이로드.
//!
//! `POST /bot/{bot_id}` 본문. 값이 없는 필드는 JSON 키 자체를 생략한다.

use serde::{Deserialize, Serialize};

use crate::models::graph::CustomGraphEntry;

/// 봇 통계 스냅샷
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    /// 길드 수
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guilds: Option<u64>,
    /// 유저 수 (members intent 필요)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<u64>,
    /// 샤드 수
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<u64>,
    /// 게이트웨이 지연 (밀리초)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ping: Option<u64>,
    /// 프로세스 고유 메모리 (USS, 바이트)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_usage: Option<u64>,
    /// 프로세스 상주 메모리 (RSS, 바이트)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ram: Option<u64>,
    /// CPU 사용률 (0.0 ~ 100.0 × 코어 수)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<f64>,
    /// 대역폭 (미구현, 자동 전송 루프는 채우지 않음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u64>,
    /// 커스텀 그래프 데이터
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Vec<CustomGraphEntry>>,
}

impl StatsPayload {
    /// 모든 필드가 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.guilds.is_none()
            && self.users.is_none()
            && self.shards.is_none()
            && self.api_ping.is_none()
            && self.ram_usage.is_none()
            && self.total_ram.is_none()
            && self.cpu_usage.is_none()
            && self.bandwidth.is_none()
            && self.custom_data.is_none()
    }
}
