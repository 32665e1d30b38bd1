//! 프로세스 리소스 샘플 모델.

/// 현재 프로세스 메모리 사용량 (바이트)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMemory {
    /// 고유 메모리 (USS)
    pub uss: u64,
    /// 상주 메모리 (RSS)
    pub rss: u64,
}
