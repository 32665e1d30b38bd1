//! 현재 프로세스 리소스 샘플링.
//!
//! `ProcessSampler` 포트 구현. sysinfo 기반 CPU/RSS 수집.

use async_trait::async_trait;
use disstat_core::error::CoreError;
use disstat_core::models::process::ProcessMemory;
use disstat_core::ports::monitor::ProcessSampler;
use std::sync::Mutex;
use std::time::Duration;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::debug;

/// 의미 있는 CPU 사용률을 얻기 위한 최소 샘플링 간격
pub const CPU_SAMPLE_INTERVAL: Duration = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;

/// sysinfo 기반 프로세스 샘플러: `ProcessSampler` 포트 구현
///
/// CPU 사용률은 직전 갱신 이후 구간 평균이므로 같은 인스턴스를 재사용해야 한다.
pub struct SysInfoProcessSampler {
    sys: Mutex<System>,
    pid: Pid,
}

impl SysInfoProcessSampler {
    /// 현재 프로세스 샘플러 생성
    pub fn new() -> Self {
        Self::for_pid(Pid::from_u32(std::process::id()))
    }

    /// 지정 프로세스 샘플러 생성
    pub fn for_pid(pid: Pid) -> Self {
        let mut sys = System::new();
        // CPU 사용률 기준점
        refresh(&mut sys, pid);
        Self {
            sys: Mutex::new(sys),
            pid,
        }
    }

    fn refreshed<T>(&self, read: impl FnOnce(&sysinfo::Process) -> T) -> Result<T, CoreError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| CoreError::Internal(format!("시스템 잠금 실패: {e}")))?;
        refresh(&mut sys, self.pid);
        sys.process(self.pid)
            .map(read)
            .ok_or_else(|| CoreError::Internal(format!("프로세스 {} 미발견", self.pid)))
    }
}

impl Default for SysInfoProcessSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn refresh(sys: &mut System, pid: Pid) {
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_cpu().with_memory(),
    );
}

#[async_trait]
impl ProcessSampler for SysInfoProcessSampler {
    async fn cpu_usage(&self) -> Result<f64, CoreError> {
        let cpu = self.refreshed(|p| f64::from(p.cpu_usage()))?;
        debug!("프로세스 CPU: {cpu:.1}%");
        Ok(cpu)
    }

    async fn memory(&self) -> Result<ProcessMemory, CoreError> {
        let rss = self.refreshed(|p| p.memory())?;

        #[cfg(target_os = "linux")]
        let uss = crate::linux::read_uss(self.pid.as_u32())?.unwrap_or(rss);
        #[cfg(not(target_os = "linux"))]
        let uss = rss;

        debug!(
            "프로세스 메모리: USS {}MB, RSS {}MB",
            uss / 1_048_576,
            rss / 1_048_576
        );
        Ok(ProcessMemory { uss, rss })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_current_process() {
        let sampler = SysInfoProcessSampler::new();
        let cpu = sampler.cpu_usage().await.unwrap();
        assert!(cpu >= 0.0);

        match sampler.memory().await {
            Ok(mem) => {
                assert!(mem.rss > 0);
                assert!(mem.uss > 0);
            }
            Err(CoreError::PermissionDenied(_)) => {}
            Err(e) => panic!("예상치 못한 에러: {e}"),
        }
    }

    #[tokio::test]
    async fn busy_process_reports_cpu_after_sample_interval() {
        let sampler = SysInfoProcessSampler::new();

        let start = std::time::Instant::now();
        let mut acc = 0u64;
        while start.elapsed() < CPU_SAMPLE_INTERVAL * 2 {
            acc = std::hint::black_box(acc.wrapping_add(1));
        }

        let cpu = sampler.cpu_usage().await.unwrap();
        assert!(cpu > 0.0, "cpu={cpu}");
    }

    #[tokio::test]
    async fn missing_process_is_internal_error() {
        // 존재할 수 없는 PID
        let sampler = SysInfoProcessSampler::for_pid(Pid::from_u32(u32::MAX - 1));
        let err = sampler.cpu_usage().await.unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));
    }
}
