use std::fmt::Display;
use std::future::Future;

/// Awaits `f()`, logging any error and substituting `fallback`.
pub async fn try_catch_async<T, E, F, Fut>(f: F, fallback: T) -> T
where
    E: Display,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match f().await {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "Async operation failed");
            fallback
        }
    }
}
