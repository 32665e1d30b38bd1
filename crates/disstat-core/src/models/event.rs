//! 호스트에 전달하는 클라이언트 이벤트.

use std::sync::Arc;

use crate::error::CoreError;
use crate::models::graph::CustomGraphEntry;
use crate::models::stats::StatsPayload;

/// 클라이언트 이벤트: `BotHost::dispatch`로 전달
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// 자동 전송 성공
    StatsPosted(StatsPayload),
    /// 자동 전송 실패
    StatsPostError {
        payload: StatsPayload,
        error: Arc<CoreError>,
    },
    /// 커맨드 이벤트 전송 성공
    CommandPosted(CustomGraphEntry),
    /// 커맨드 이벤트 전송 실패
    CommandPostError {
        payload: CustomGraphEntry,
        error: Arc<CoreError>,
    },
}

impl ClientEvent {
    /// 이벤트 이름
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::StatsPosted(_) => "stats-posted",
            ClientEvent::StatsPostError { .. } => "stats-post-error",
            ClientEvent::CommandPosted(_) => "command-posted",
            ClientEvent::CommandPostError { .. } => "command-post-error",
        }
    }

    /// 에러 이벤트 여부
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ClientEvent::StatsPostError { .. } | ClientEvent::CommandPostError { .. }
        )
    }
}
