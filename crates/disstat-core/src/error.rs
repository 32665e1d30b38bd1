//! DisStat 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 이 타입을 그대로 반환한다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 잘못된 인자 (조회할 봇 ID를 결정할 수 없음 등)
    #[error("잘못된 인자: {0}")]
    InvalidArgument(String),

    /// 잘못된 상태 (호스트 봇 로그인 전 전송 시도 등)
    #[error("잘못된 상태: {0}")]
    InvalidState(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 인증 실패 (API 키 오류)
    #[error("인증 에러: {0}")]
    Auth(String),

    /// 리소스를 찾을 수 없음
    #[error("{resource_type} 미발견: {id}")]
    NotFound {
        /// 리소스 종류 (예: "Bot")
        resource_type: String,
        /// 리소스 식별자
        id: String,
    },

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 2xx 이외의 HTTP 응답
    #[error("HTTP 에러 ({status}): {body}")]
    Http {
        /// 응답 상태 코드
        status: u16,
        /// 응답 본문
        body: String,
    },

    /// Rate Limit 초과 (429)
    #[error("요청 한도 초과, {retry_after_secs}초 후 재시도")]
    RateLimit {
        /// 재시도 대기 시간 (초)
        retry_after_secs: u64,
    },

    /// 서비스 일시 불가 (503)
    #[error("서비스 일시 불가: {0}")]
    ServiceUnavailable(String),

    /// OS가 프로세스 정보 접근을 거부함
    #[error("권한 거부: {0}")]
    PermissionDenied(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}

impl CoreError {
    /// 전송 계층 에러 여부 (HTTP 상태/연결 실패)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CoreError::Network(_)
                | CoreError::Http { .. }
                | CoreError::Auth(_)
                | CoreError::NotFound { .. }
                | CoreError::RateLimit { .. }
                | CoreError::ServiceUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_classification() {
        assert!(CoreError::Network("x".into()).is_transport());
        assert!(CoreError::Http {
            status: 500,
            body: String::new()
        }
        .is_transport());
        assert!(!CoreError::InvalidState("x".into()).is_transport());
        assert!(!CoreError::PermissionDenied("x".into()).is_transport());
    }

    #[test]
    fn io_permission_error_is_wrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
