//! # disstat-monitor
//!
//! 프로세스 리소스 샘플링 어댑터.
//! 현재 프로세스의 CPU 사용률과 메모리(USS/RSS)를 수집한다.
//! USS는 Linux에서 procfs로 측정하고, 그 외 플랫폼은 RSS로 대체한다.

pub mod process;

#[cfg(target_os = "linux")]
pub mod linux;

pub use process::{SysInfoProcessSampler, CPU_SAMPLE_INTERVAL};
