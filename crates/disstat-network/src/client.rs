//! DisStat REST API 클라이언트.
//!
//! API 키 인증 세션을 지연 생성하고, 봇 조회/통계 전송/커스텀 그래프/커맨드 이벤트
//! 요청을 제공한다. 재시도는 하지 않는다.

use disstat_core::config::ClientConfig;
use disstat_core::error::CoreError;
use disstat_core::models::event::ClientEvent;
use disstat_core::models::graph::CustomGraphEntry;
use disstat_core::models::query::{BotStatsQuery, BotStatsResponse};
use disstat_core::models::stats::StatsPayload;
use disstat_core::ports::graph_source::CustomGraphSource;
use disstat_core::ports::host::BotHost;
use disstat_core::ports::monitor::ProcessSampler;
use disstat_monitor::SysInfoProcessSampler;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::response::{check_response, network_error, read_json};

/// 인증된 HTTP 세션
struct Session {
    http: reqwest::Client,
    /// 외부에서 받은 클라이언트는 기본 헤더가 없으므로 요청마다 키를 붙인다
    attach_auth: bool,
}

/// DisStat 클라이언트
///
/// 네트워크 연결은 첫 요청 시점에 만든다. `Arc`로 공유하여
/// 자동 전송 루프와 수동 호출이 같은 커넥션 풀을 사용한다.
pub struct DisstatClient {
    pub(crate) config: ClientConfig,
    pub(crate) host: Arc<dyn BotHost>,
    session: OnceCell<Session>,
    pub(crate) sampler: Arc<dyn ProcessSampler>,
    pub(crate) custom_graph_source: Option<Arc<dyn CustomGraphSource>>,
    pub(crate) post_interval: Duration,
}

impl DisstatClient {
    /// 새 클라이언트 생성 (네트워크 I/O 없음)
    pub fn new(config: ClientConfig, host: Arc<dyn BotHost>) -> Self {
        let post_interval = config.post_interval();
        Self {
            config,
            host,
            session: OnceCell::new(),
            sampler: Arc::new(SysInfoProcessSampler::new()),
            custom_graph_source: None,
            post_interval,
        }
    }

    /// 미리 만든 HTTP 클라이언트 사용
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.session = OnceCell::new_with(Some(Session {
            http,
            attach_auth: true,
        }));
        self
    }

    /// 커스텀 그래프 데이터 소스 설정 (자동 전송 시 `customData`)
    pub fn with_custom_graph_source(mut self, source: Arc<dyn CustomGraphSource>) -> Self {
        self.custom_graph_source = Some(source);
        self
    }

    /// 프로세스 샘플러 교체
    pub fn with_sampler(mut self, sampler: Arc<dyn ProcessSampler>) -> Self {
        self.sampler = sampler;
        self
    }

    /// 자동 전송 주기 변경
    pub fn with_post_interval(mut self, interval: Duration) -> Self {
        self.post_interval = interval;
        self
    }

    /// 현재 설정
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 세션 획득: 최초 호출 시 한 번만 생성
    async fn session(&self) -> Result<&Session, CoreError> {
        self.session
            .get_or_try_init(|| async {
                let mut auth = HeaderValue::from_str(&self.config.api_key)
                    .map_err(|e| CoreError::Config(format!("API 키 헤더 값 오류: {e}")))?;
                auth.set_sensitive(true);

                let mut headers = HeaderMap::new();
                headers.insert(AUTHORIZATION, auth);

                let http = reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

                debug!("HTTP 세션 생성: {}", self.config.base_url);
                Ok::<_, CoreError>(Session {
                    http,
                    attach_auth: false,
                })
            })
            .await
    }

    /// Authorization 헤더가 보장된 요청 빌더 반환
    async fn authorized_request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, CoreError> {
        let session = self.session().await?;
        let url = format!("{}{}", self.config.base_url, path);
        let mut req = session.http.request(method, &url);
        if session.attach_auth {
            req = req.header(AUTHORIZATION, &self.config.api_key);
        }
        Ok(req)
    }

    /// 로그인된 호스트 봇 ID
    fn logged_in_bot_id(&self) -> Result<u64, CoreError> {
        self.host.bot_id().ok_or_else(|| {
            CoreError::InvalidState(
                "호스트 봇이 아직 로그인하지 않았습니다. READY 이후에 전송하세요".to_string(),
            )
        })
    }

    /// 봇 정보 조회: `GET /bot/{bot_id}`
    ///
    /// `bot_id`가 없거나 0이면 호스트 봇 자신의 ID를 사용한다. 응답 상태는 확인하지 않고
    /// 본문 JSON을 그대로 반환한다.
    pub async fn get_bot(&self, query: &BotStatsQuery) -> Result<BotStatsResponse, CoreError> {
        let bot_id = query
            .bot_id
            .filter(|&id| id != 0)
            .or_else(|| self.host.bot_id())
            .ok_or_else(|| {
                CoreError::InvalidArgument(
                    "봇 ID가 지정되지 않았고 호스트 봇도 아직 로그인하지 않았습니다".to_string(),
                )
            })?;

        let params = query.query_pairs();
        debug!("봇 조회: bot_id={bot_id}, params={params:?}");

        let resp = self
            .authorized_request(reqwest::Method::GET, &format!("/bot/{bot_id}"))
            .await?
            .query(&params)
            .send()
            .await
            .map_err(|e| network_error("봇 조회 요청 실패", e))?;

        read_json(resp).await
    }

    /// 통계 스냅샷 전송: `POST /bot/{bot_id}`
    ///
    /// 모든 필드가 비어 있으면 요청 없이 경고만 남기고 `Ok(None)`.
    pub async fn post_stats(
        &self,
        payload: &StatsPayload,
    ) -> Result<Option<reqwest::Response>, CoreError> {
        let bot_id = self.logged_in_bot_id()?;

        if payload.is_empty() {
            warn!("전송할 통계가 없어 post_stats를 건너뜀");
            return Ok(None);
        }

        debug!("통계 전송: bot_id={bot_id}");
        let resp = self
            .authorized_request(reqwest::Method::POST, &format!("/bot/{bot_id}"))
            .await?
            .json(payload)
            .send()
            .await
            .map_err(|e| network_error("통계 전송 요청 실패", e))?;

        check_response(resp).await.map(Some)
    }

    /// 커스텀 그래프 포인트 전송: `POST /bot/{bot_id}/custom`
    ///
    /// `get_bot`과 마찬가지로 응답 상태는 확인하지 않고 본문 JSON을 반환한다.
    pub async fn post_custom_graph_data(
        &self,
        entry: &CustomGraphEntry,
    ) -> Result<serde_json::Value, CoreError> {
        let resp = self.send_custom(entry).await?;
        read_json(resp).await
    }

    /// 커맨드 사용 이벤트 전송
    ///
    /// 실패해도 에러를 반환하지 않는다. 결과는 `command-posted` 또는
    /// `command-post-error` 이벤트로 호스트에 전달된다.
    pub async fn post_command(&self, command_name: &str, invoker_id: u64, guild_id: Option<u64>) {
        let entry = CustomGraphEntry::command(command_name, invoker_id, guild_id);

        let result = match self.send_custom(&entry).await {
            Ok(resp) => check_response(resp).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => {
                debug!("커맨드 이벤트 전송: {command_name}");
                self.host.dispatch(ClientEvent::CommandPosted(entry));
            }
            Err(e) => {
                warn!("커맨드 이벤트 전송 실패 ({command_name}): {e}");
                self.host.dispatch(ClientEvent::CommandPostError {
                    payload: entry,
                    error: Arc::new(e),
                });
            }
        }
    }

    async fn send_custom(&self, entry: &CustomGraphEntry) -> Result<reqwest::Response, CoreError> {
        let bot_id = self.logged_in_bot_id()?;

        let resp = self
            .authorized_request(reqwest::Method::POST, &format!("/bot/{bot_id}/custom"))
            .await?
            .json(entry)
            .send()
            .await
            .map_err(|e| network_error("커스텀 그래프 전송 실패", e))?;

        Ok(resp)
    }
}
