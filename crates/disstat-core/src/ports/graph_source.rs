//! 커스텀 그래프 데이터 소스 포트.
//!
//! 자동 전송 루프가 매 주기마다 호출하여 `customData` 필드를 채운다.

use async_trait::async_trait;
use std::future::Future;

use crate::error::CoreError;
use crate::models::graph::CustomGraphEntry;

/// 커스텀 메트릭 제공자
#[async_trait]
pub trait CustomGraphSource: Send + Sync {
    /// 이번 주기에 보낼 그래프 포인트 수집
    async fn collect(&self) -> Result<Vec<CustomGraphEntry>, CoreError>;
}

/// async 클로저를 그대로 소스로 사용
#[async_trait]
impl<F, Fut> CustomGraphSource for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<CustomGraphEntry>, CoreError>> + Send,
{
    async fn collect(&self) -> Result<Vec<CustomGraphEntry>, CoreError> {
        (self)().await
    }
}
