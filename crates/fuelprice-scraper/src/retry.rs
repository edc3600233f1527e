//! Fixed-delay retry for page fetches.
//!
//! The price pages are served by a CMS that occasionally answers with a 5xx
//! or drops the connection; a short fixed pause is enough to get a good
//! response. A 404 is final and returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Returns `true` if `err` may clear up on a later attempt.
///
/// Retriable: [`ScraperError::Http`] (connection reset, timeout) and
/// [`ScraperError::UnexpectedStatus`] (5xx and other non-2xx answers).
fn is_retriable(err: &ScraperError) -> bool {
    matches!(
        err,
        ScraperError::Http(_) | ScraperError::UnexpectedStatus { .. }
    )
}

/// Executes `operation`, retrying retriable errors up to `max_retries`
/// additional times with `delay_ms` milliseconds between attempts.
///
/// With `max_retries = 2` the operation runs at most 3 times. The last error
/// is returned once retries are exhausted.
pub(crate) async fn retry_with_fixed_delay<T, F, Fut>(
    max_retries: u32,
    delay_ms: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        attempt += 1;
        tracing::warn!(
            attempt,
            max_retries,
            delay_ms,
            error = %err,
            "page fetch failed, retrying"
        );
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
