//! # disstat-cli
//!
//! DisStat 명령줄 도구 진입점.
//! 설정 로드, 봇 조회, 통계/커스텀 그래프/커맨드 전송, 자동 전송 실행.

mod host;
mod lifecycle;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use disstat_core::config::ClientConfig;
use disstat_core::config_manager::{apply_overrides, ConfigManager, ENV_API_KEY};
use disstat_core::event_bus::EventBus;
use disstat_core::models::event::ClientEvent;
use disstat_core::models::graph::{CustomGraphEntry, GraphValue};
use disstat_core::models::query::BotStatsQuery;
use disstat_monitor::{SysInfoProcessSampler, CPU_SAMPLE_INTERVAL};
use disstat_network::DisstatClient;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::host::StaticHost;
use crate::lifecycle::LifecycleManager;

/// DisStat 통계 클라이언트
#[derive(Parser, Debug)]
#[command(name = "disstat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼별 설정 디렉토리)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// API 키 (설정 파일 값보다 우선)
    #[arg(long, env = ENV_API_KEY, global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// API 기본 URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 봇 정보 조회
    Bot {
        /// 조회할 봇 ID
        bot_id: u64,
        /// 과거 통계 포함
        #[arg(long)]
        stats: bool,
        /// 데이터 포인트 수
        #[arg(long)]
        data_points: Option<u64>,
        /// 시작 시각 (unix ms)
        #[arg(long)]
        start: Option<i64>,
        /// 종료 시각 (unix ms)
        #[arg(long)]
        end: Option<i64>,
    },
    /// 통계 스냅샷 1회 전송
    Post {
        #[command(flatten)]
        bot: BotArgs,
    },
    /// 커스텀 그래프 포인트 전송
    Custom {
        /// 봇 ID
        #[arg(long)]
        bot_id: u64,
        /// 그래프 이름
        kind: String,
        /// 값 (최대 3개, 정수가 아니면 문자열로 전송)
        #[arg(num_args = 0..=3)]
        values: Vec<String>,
    },
    /// 커맨드 사용 이벤트 전송
    Command {
        /// 봇 ID
        #[arg(long)]
        bot_id: u64,
        /// 커맨드 이름
        name: String,
        /// 실행한 사용자 ID
        #[arg(long)]
        invoker: u64,
        /// 길드 ID (DM이면 생략)
        #[arg(long)]
        guild: Option<u64>,
    },
    /// 자동 전송 루프 실행 (Ctrl+C로 종료)
    Watch {
        #[command(flatten)]
        bot: BotArgs,
        /// 전송 간격 (초, 기본: 설정 파일 값)
        #[arg(long)]
        interval: Option<u64>,
    },
}

/// 호스트 봇 수치
#[derive(clap::Args, Debug)]
struct BotArgs {
    /// 봇 ID
    #[arg(long)]
    bot_id: u64,
    /// 길드 수
    #[arg(long, default_value = "0")]
    guilds: u64,
    /// 사용자 수 (지정하면 members intent가 있는 것으로 취급)
    #[arg(long)]
    users: Option<u64>,
    /// 샤드 수
    #[arg(long)]
    shards: Option<u64>,
}

impl BotArgs {
    fn host(&self, bus: EventBus) -> StaticHost {
        StaticHost::new(Some(self.bot_id), bus).with_counts(self.guilds, self.users, self.shards)
    }
}

/// 설정 파일 + 환경변수 + CLI 인자 순으로 병합한 설정
fn load_config(args: &Args) -> Result<ClientConfig> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    info!("설정 파일: {}", manager.config_path().display());

    let config = apply_overrides(
        manager.effective(),
        args.api_key.clone(),
        args.base_url.clone(),
    );
    config.validate()?;
    Ok(config)
}

/// 정수로 해석되면 정수, 아니면 문자열 값
fn parse_graph_value(raw: &str) -> GraphValue {
    raw.parse::<i64>()
        .map(GraphValue::Integer)
        .unwrap_or_else(|_| GraphValue::Text(raw.to_string()))
}

fn custom_entry(kind: String, values: Vec<String>) -> Result<CustomGraphEntry> {
    if values.len() > 3 {
        return Err(anyhow!("값은 최대 3개까지 지정할 수 있습니다"));
    }
    let mut values = values.iter().map(|v| parse_graph_value(v));
    Ok(CustomGraphEntry {
        kind,
        value1: values.next(),
        value2: values.next(),
        value3: values.next(),
    })
}

/// CPU 기준점 이후 최소 샘플링 간격만큼 기다린 샘플러
///
/// 1회 전송에서는 생성 직후 측정하면 CPU 사용률이 항상 0에 가깝다.
async fn primed_sampler() -> Arc<SysInfoProcessSampler> {
    let sampler = Arc::new(SysInfoProcessSampler::new());
    tokio::time::sleep(CPU_SAMPLE_INTERVAL).await;
    sampler
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn log_event(event: &ClientEvent) {
    match event {
        ClientEvent::StatsPosted(payload) => {
            info!("{}: guilds={:?}", event.name(), payload.guilds)
        }
        ClientEvent::CommandPosted(entry) => info!("{}: {:?}", event.name(), entry.value1),
        ClientEvent::StatsPostError { error, .. } | ClientEvent::CommandPostError { error, .. } => {
            warn!("{}: {}", event.name(), error)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "disstat={},disstat_core={},disstat_monitor={},disstat_network={}",
        args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    let config = load_config(&args)?;
    let bus = EventBus::default();

    match args.command {
        Command::Bot {
            bot_id,
            stats,
            data_points,
            start,
            end,
        } => {
            let host = Arc::new(StaticHost::new(None, bus));
            let client = DisstatClient::new(config, host);
            let query = BotStatsQuery::for_bot(bot_id)
                .with_stats(stats)
                .with_range(start, end);
            let query = match data_points {
                Some(n) => query.with_data_points(n),
                None => query,
            };
            print_json(&client.get_bot(&query).await?)?;
        }
        Command::Post { bot } => {
            let client = DisstatClient::new(config, Arc::new(bot.host(bus)))
                .with_sampler(primed_sampler().await);
            let payload = client.collect_payload().await;
            print_json(&payload)?;
            match client.post_stats(&payload).await? {
                Some(resp) => info!("통계 전송 완료: {}", resp.status()),
                None => warn!("전송할 통계가 없습니다"),
            }
        }
        Command::Custom {
            bot_id,
            kind,
            values,
        } => {
            let entry = custom_entry(kind, values)?;
            let client = DisstatClient::new(config, Arc::new(StaticHost::new(Some(bot_id), bus)));
            print_json(&client.post_custom_graph_data(&entry).await?)?;
        }
        Command::Command {
            bot_id,
            name,
            invoker,
            guild,
        } => {
            let mut events = bus.subscribe();
            let client = DisstatClient::new(config, Arc::new(StaticHost::new(Some(bot_id), bus)));
            client.post_command(&name, invoker, guild).await;

            match events.try_recv() {
                Ok(ClientEvent::CommandPostError { error, .. }) => {
                    return Err(anyhow!("커맨드 이벤트 전송 실패: {error}"));
                }
                Ok(event) => log_event(&event),
                Err(e) => warn!("커맨드 이벤트를 수신하지 못함: {e}"),
            }
        }
        Command::Watch { bot, interval } => {
            let mut config = config.with_auto_post(true);
            if let Some(secs) = interval {
                config = config.with_post_interval(Duration::from_secs(secs));
                config.validate()?;
            }
            let mut events = bus.subscribe();
            let client = Arc::new(DisstatClient::new(config, Arc::new(bot.host(bus))));

            let lifecycle = LifecycleManager::new();
            let handle = client
                .clone()
                .start_auto_post(lifecycle.subscribe())
                .ok_or_else(|| anyhow!("자동 전송이 비활성화되어 있습니다"))?;
            info!(
                "자동 전송 시작: 간격 {}초",
                client.config().post_interval().as_secs()
            );

            let printer = tokio::spawn(async move {
                while let Ok(event) = events.recv().await {
                    log_event(&event);
                }
            });

            lifecycle.wait_for_signal().await?;
            if let Err(e) = handle.await {
                error!("자동 전송 태스크 종료 실패: {e}");
            }
            printer.abort();
            info!("종료");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_values_parse_integers_first() {
        assert_eq!(parse_graph_value("42"), GraphValue::Integer(42));
        assert_eq!(parse_graph_value("-7"), GraphValue::Integer(-7));
        assert_eq!(parse_graph_value("en-US"), GraphValue::Text("en-US".into()));
    }

    #[test]
    fn custom_entry_fills_values_in_order() {
        let entry = custom_entry("Votes".into(), vec!["3".into(), "top.gg".into()]).unwrap();
        assert_eq!(entry.kind, "Votes");
        assert_eq!(entry.value1, Some(GraphValue::Integer(3)));
        assert_eq!(entry.value2, Some(GraphValue::Text("top.gg".into())));
        assert!(entry.value3.is_none());
    }

    #[test]
    fn custom_entry_rejects_too_many_values() {
        let values = vec!["1".into(), "2".into(), "3".into(), "4".into()];
        assert!(custom_entry("X".into(), values).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn primed_sampler_waits_for_cpu_interval() {
        let start = tokio::time::Instant::now();
        let _sampler = primed_sampler().await;
        assert!(start.elapsed() >= CPU_SAMPLE_INTERVAL);
    }

    #[test]
    fn cli_parses_watch_subcommand() {
        let args = Args::parse_from([
            "disstat",
            "--api-key",
            "k",
            "watch",
            "--bot-id",
            "5",
            "--guilds",
            "2",
            "--interval",
            "30",
        ]);
        assert_eq!(args.api_key.as_deref(), Some("k"));
        match args.command {
            Command::Watch { bot, interval } => {
                assert_eq!(bot.bot_id, 5);
                assert_eq!(bot.guilds, 2);
                assert_eq!(interval, Some(30));
            }
            other => panic!("예상치 못한 서브커맨드: {other:?}"),
        }
    }
}
