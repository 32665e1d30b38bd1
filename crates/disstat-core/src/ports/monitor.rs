//! 프로세스 리소스 샘플링 포트.
//!
//! 구현: `disstat-monitor` crate (sysinfo + Linux procfs)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::process::ProcessMemory;

/// 현재 프로세스 리소스 샘플러
#[async_trait]
pub trait ProcessSampler: Send + Sync {
    /// 프로세스 CPU 사용률 (%)
    async fn cpu_usage(&self) -> Result<f64, CoreError>;

    /// 프로세스 메모리 사용량
    ///
    /// OS가 접근을 거부하면 `CoreError::PermissionDenied`를 반환한다.
    async fn memory(&self) -> Result<ProcessMemory, CoreError>;
}
