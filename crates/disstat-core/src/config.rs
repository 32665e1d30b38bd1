//! 클라이언트 설정 구조체.
//!
//! API 키, 서버 URL, 자동 전송 여부와 주기를 정의한다.
//! `ConfigManager`를 통해 JSON 파일/환경변수에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CoreError;
use crate::BASE_URL;

/// 기본 자동 전송 주기 (초)
pub const DEFAULT_POST_INTERVAL_SECS: u64 = 90;

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_post_interval_secs() -> u64 {
    DEFAULT_POST_INTERVAL_SECS
}

/// DisStat 클라이언트 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API 키: `Authorization` 헤더에 그대로 전송
    #[serde(default)]
    pub api_key: String,
    /// API 기본 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 자동 전송 활성화
    #[serde(default = "default_true")]
    pub auto_post: bool,
    /// 자동 전송 주기 (초)
    #[serde(default = "default_post_interval_secs")]
    pub post_interval_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            auto_post: true,
            post_interval_secs: DEFAULT_POST_INTERVAL_SECS,
        }
    }
}

impl ClientConfig {
    /// API 키만 지정한 기본 설정
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// 기본 URL 변경 (테스트/셀프호스팅)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_auto_post(mut self, auto_post: bool) -> Self {
        self.auto_post = auto_post;
        self
    }

    pub fn with_post_interval(mut self, interval: Duration) -> Self {
        self.post_interval_secs = interval.as_secs();
        self
    }

    /// 자동 전송 주기
    pub fn post_interval(&self) -> Duration {
        Duration::from_secs(self.post_interval_secs)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_key.trim().is_empty() {
            return Err(CoreError::Config("API 키가 비어 있습니다".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(CoreError::Config("기본 URL이 비어 있습니다".to_string()));
        }
        if self.post_interval_secs == 0 {
            return Err(CoreError::Config(
                "자동 전송 주기는 0초일 수 없습니다".to_string(),
            ));
        }
        Ok(())
    }
}
