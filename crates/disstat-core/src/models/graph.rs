//! 커스텀 그래프 데이터 모델.
//!
//! 임의의 사용자 메트릭 포인트와 내장 "Commands Used" 이벤트가 같은 형태를 공유한다.

use serde::{Deserialize, Serialize};

/// 내장 커맨드 사용 이벤트의 그래프 타입
pub const COMMANDS_USED: &str = "Commands Used";

/// 그래프 값: 정수 또는 문자열
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for GraphValue {
    fn from(value: i64) -> Self {
        GraphValue::Integer(value)
    }
}

impl From<i32> for GraphValue {
    fn from(value: i32) -> Self {
        GraphValue::Integer(value.into())
    }
}

/// Discord snowflake 등 부호 없는 ID. i64 범위를 넘으면 10진 문자열로 보낸다.
impl From<u64> for GraphValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => GraphValue::Integer(v),
            Err(_) => GraphValue::Text(value.to_string()),
        }
    }
}

impl From<String> for GraphValue {
    fn from(value: String) -> Self {
        GraphValue::Text(value)
    }
}

impl From<&str> for GraphValue {
    fn from(value: &str) -> Self {
        GraphValue::Text(value.to_string())
    }
}

/// 커스텀 그래프 포인트
///
/// 직렬화 형태: `{"type": "...", "value1"?, "value2"?, "value3"?}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGraphEntry {
    /// 그래프 타입 라벨
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value1: Option<GraphValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<GraphValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value3: Option<GraphValue>,
}

impl CustomGraphEntry {
    /// 값 없는 새 그래프 포인트 생성
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value1: None,
            value2: None,
            value3: None,
        }
    }

    pub fn with_value1(mut self, value: impl Into<GraphValue>) -> Self {
        self.value1 = Some(value.into());
        self
    }

    pub fn with_value2(mut self, value: impl Into<GraphValue>) -> Self {
        self.value2 = Some(value.into());
        self
    }

    pub fn with_value3(mut self, value: impl Into<GraphValue>) -> Self {
        self.value3 = Some(value.into());
        self
    }

    /// 커맨드 사용 이벤트 생성
    ///
    /// value1 = 커맨드 이름, value2 = 호출자 ID, value3 = 길드 ID (DM이면 없음)
    pub fn command(command_name: &str, invoker_id: u64, guild_id: Option<u64>) -> Self {
        Self {
            kind: COMMANDS_USED.to_string(),
            value1: Some(command_name.into()),
            value2: Some(invoker_id.into()),
            value3: guild_id.map(GraphValue::from),
        }
    }
}
