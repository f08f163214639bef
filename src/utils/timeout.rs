use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;

use crate::error::ApiError;

/// Corre `request` contra `deadline`; si el deadline termina antes, `ApiError::Timeout`.
/// En el navegador el deadline es un `gloo_timers::future::TimeoutFuture`.
pub async fn with_timeout<F, D, T>(request: F, deadline: D, timeout_ms: u32) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    pin_mut!(request);
    pin_mut!(deadline);

    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}
