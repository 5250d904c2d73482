//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` opens the scope; error responses and DB error logs read it
//! back so a client-visible `trace_id` can be matched against the logs.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current task, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id()`].
pub async fn with_trace_id<F, R>(trace_id: impl Into<String>, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id.into(), future).await
}
