//! HTTP 응답 상태 코드 → `CoreError` 매핑.

use disstat_core::error::CoreError;
use reqwest::header::RETRY_AFTER;
use tracing::warn;

/// Retry-After 헤더가 없을 때의 기본 대기 시간 (초)
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// 응답 상태 코드 확인: 2xx가 아니면 에러
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let retry_after = resp
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

    let text = resp.text().await.unwrap_or_else(|e| {
        warn!("응답 본문 읽기 실패: {e}");
        String::new()
    });

    Err(status_error(status.as_u16(), text, retry_after))
}

fn status_error(status: u16, body: String, retry_after_secs: u64) -> CoreError {
    match status {
        401 => CoreError::Auth(format!("API 키 인증 실패: {body}")),
        404 => CoreError::NotFound {
            resource_type: "Bot".to_string(),
            id: body,
        },
        429 => CoreError::RateLimit { retry_after_secs },
        503 => CoreError::ServiceUnavailable(body),
        _ => CoreError::Http { status, body },
    }
}

/// 전송 실패 → 네트워크 에러
pub(crate) fn network_error(context: &str, e: reqwest::Error) -> CoreError {
    CoreError::Network(format!("{context}: {e}"))
}

/// 응답 본문을 JSON으로 파싱
pub(crate) async fn read_json(resp: reqwest::Response) -> Result<serde_json::Value, CoreError> {
    let body = resp
        .text()
        .await
        .map_err(|e| network_error("응답 본문 읽기 실패", e))?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(status_error(401, "x".into(), 60), CoreError::Auth(_)));
        assert!(matches!(
            status_error(404, "x".into(), 60),
            CoreError::NotFound { .. }
        ));
        assert!(matches!(
            status_error(429, String::new(), 5),
            CoreError::RateLimit {
                retry_after_secs: 5
            }
        ));
        assert!(matches!(
            status_error(503, String::new(), 60),
            CoreError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            status_error(500, "boom".into(), 60),
            CoreError::Http { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn retry_after_header_is_used() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/limited")
            .with_status(429)
            .with_header("retry-after", "7")
            .create_async()
            .await;

        let resp = reqwest::get(format!("{}/limited", server.url()))
            .await
            .unwrap();
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::RateLimit {
                retry_after_secs: 7
            }
        ));
    }
}
