//! 자동 통계 전송 루프.
//!
//! 주기마다 호스트/프로세스 메트릭을 수집해 `post_stats`로 전송하고,
//! 결과를 `stats-posted` / `stats-post-error` 이벤트로 호스트에 알린다.
//! 한 주기의 실패가 루프를 끝내지 않는다.

use disstat_core::error::CoreError;
use disstat_core::models::event::ClientEvent;
use disstat_core::models::stats::StatsPayload;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::client::DisstatClient;

impl DisstatClient {
    /// 자동 전송 루프 시작
    ///
    /// 첫 전송은 즉시, 이후 매 전송 뒤 `post_interval`만큼 대기한다.
    /// `shutdown_rx`에 `true`가 들어오거나 송신자가 drop되면 종료.
    /// 설정에서 자동 전송이 꺼져 있으면 `None`.
    pub fn start_auto_post(
        self: Arc<Self>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> Option<JoinHandle<()>> {
        if !self.config.auto_post {
            info!("자동 전송 비활성화, 루프를 시작하지 않음");
            return None;
        }

        Some(tokio::spawn(async move {
            let interval = self.post_interval;
            info!("자동 전송 시작: 주기={}s", interval.as_secs_f64());

            loop {
                if *shutdown_rx.borrow() {
                    break;
                }

                self.run_auto_post_iteration().await;

                if !wait_or_shutdown(interval, &mut shutdown_rx).await {
                    break;
                }
            }

            info!("자동 전송 종료");
        }))
    }

    /// 자동 전송 1회: 수집 후 전송, 결과를 이벤트로 전달
    pub async fn run_auto_post_iteration(&self) {
        let payload = self.collect_payload().await;

        match self.post_stats(&payload).await {
            Ok(Some(_)) => {
                debug!("자동 통계 전송 성공");
                self.host.dispatch(ClientEvent::StatsPosted(payload));
            }
            // 빈 페이로드: post_stats가 이미 경고를 남김
            Ok(None) => {}
            Err(e) => {
                // 서버/연결 문제는 다음 주기에 회복될 수 있음
                if e.is_transport() {
                    warn!("자동 통계 전송 실패: {e}");
                } else {
                    error!("자동 통계 전송 실패: {e}");
                }
                self.host.dispatch(ClientEvent::StatsPostError {
                    payload,
                    error: Arc::new(e),
                });
            }
        }
    }

    /// 현재 호스트/프로세스 상태로 페이로드 구성
    ///
    /// 대역폭은 수집하지 않는다.
    pub async fn collect_payload(&self) -> StatsPayload {
        let mut payload = StatsPayload {
            guilds: Some(self.host.guild_count()),
            ..Default::default()
        };

        match self.sampler.cpu_usage().await {
            Ok(cpu) => payload.cpu_usage = Some(cpu),
            Err(e) => warn!("CPU 사용률 수집 실패: {e}"),
        }

        match self.sampler.memory().await {
            Ok(mem) => {
                payload.ram_usage = Some(mem.uss);
                payload.total_ram = Some(mem.rss);
            }
            Err(CoreError::PermissionDenied(reason)) => {
                debug!("메모리 정보 접근 거부, 이번 주기 생략: {reason}");
            }
            Err(e) => warn!("메모리 수집 실패: {e}"),
        }

        if self.host.has_members_intent() {
            payload.users = Some(self.host.user_count());
        }

        payload.shards = self.host.shard_count().filter(|&count| count > 0);

        let latency = self.host.latency();
        if !latency.is_zero() {
            payload.api_ping = Some((latency.as_secs_f64() * 1000.0).round() as u64);
        }

        if let Some(source) = &self.custom_graph_source {
            match source.collect().await {
                Ok(entries) => payload.custom_data = Some(entries),
                Err(e) => warn!("커스텀 그래프 데이터 수집 실패: {e}"),
            }
        }

        payload
    }
}

/// 대기 완료 시 `true`, 종료 신호 시 `false`
async fn wait_or_shutdown(interval: Duration, shutdown_rx: &mut watch::Receiver<bool>) -> bool {
    let sleep = tokio::time::sleep(interval);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return true,
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    return false;
                }
            }
        }
    }
}
