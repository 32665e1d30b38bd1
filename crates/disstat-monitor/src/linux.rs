//! Linux 플랫폼 지원.
//!
//! `/proc/<pid>/smaps_rollup`에서 고유 메모리(USS)를 계산한다.
//! USS = Private_Clean + Private_Dirty (+ Private_Hugetlb)

use disstat_core::error::CoreError;
use std::io::ErrorKind;
use tracing::debug;

const PRIVATE_FIELDS: [&str; 3] = ["Private_Clean:", "Private_Dirty:", "Private_Hugetlb:"];

/// 프로세스 USS (바이트)
///
/// `smaps_rollup`이 없는 커널(4.14 미만)이면 `Ok(None)`.
pub fn read_uss(pid: u32) -> Result<Option<u64>, CoreError> {
    let path = format!("/proc/{pid}/smaps_rollup");
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(parse_private_kb(&content).map(|kb| kb * 1024)),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(CoreError::PermissionDenied(
            format!("{path} 읽기 거부: {e}"),
        )),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{path} 없음, RSS로 대체");
            Ok(None)
        }
        Err(e) => Err(CoreError::Io(e)),
    }
}

/// smaps 내용에서 private 메모리 합계 (kB)
pub fn parse_private_kb(content: &str) -> Option<u64> {
    let mut found = false;
    let mut total = 0u64;

    for line in content.lines() {
        let Some(field) = PRIVATE_FIELDS.iter().find(|f| line.starts_with(**f)) else {
            continue;
        };
        let value = line[field.len()..]
            .split_whitespace()
            .next()
            .and_then(|v| v.parse::<u64>().ok());
        if let Some(kb) = value {
            total += kb;
            found = true;
        }
    }

    found.then_some(total)
}
