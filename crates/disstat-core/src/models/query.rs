//! 봇 정보 조회 쿼리.

/// `GET /bot/{bot_id}` 조회 조건
///
/// `bot_id`가 없거나 0이면 호스트 봇 자신의 ID로 조회한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotStatsQuery {
    /// 조회할 봇 ID
    pub bot_id: Option<u64>,
    /// 통계 포함 여부
    pub return_stats: bool,
    /// 반환할 데이터 포인트 수
    pub data_points: Option<u64>,
    /// 시작 시각 (Unix ms)
    pub start: Option<i64>,
    /// 종료 시각 (Unix ms)
    pub end: Option<i64>,
}

impl BotStatsQuery {
    pub fn for_bot(bot_id: u64) -> Self {
        Self {
            bot_id: Some(bot_id),
            ..Default::default()
        }
    }

    pub fn with_stats(mut self, return_stats: bool) -> Self {
        self.return_stats = return_stats;
        self
    }

    pub fn with_data_points(mut self, data_points: u64) -> Self {
        self.data_points = Some(data_points);
        self
    }

    pub fn with_range(mut self, start: Option<i64>, end: Option<i64>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// 쿼리 파라미터 목록: 없는 값은 제외, 값은 소문자 문자열
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let params = [
            ("returnStats", Some(self.return_stats.to_string())),
            ("dataPoints", self.data_points.map(|v| v.to_string())),
            ("start", self.start.map(|v| v.to_string())),
            ("end", self.end.map(|v| v.to_string())),
        ];
        params
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v.to_lowercase())))
            .collect()
    }
}

/// 봇 조회 응답: 스키마 검증 없이 그대로 반환
pub type BotStatsResponse = serde_json::Value;
