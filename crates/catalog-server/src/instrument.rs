use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use catalog_core::Failure;

/// What the interceptor knows about the call it wraps: the qualified
/// handler target, the handler method name, and the ordered arguments
/// taken from the route
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub target: &'static str,
    pub method: &'static str,
    pub args: Vec<String>,
}

const CATEGORY_TARGET: &str = "catalog_server::categories";
const FALLBACK_TARGET: &str = "catalog_server";

impl Invocation {
    /// Describe the handler a request will be dispatched to
    ///
    /// Routes outside the category surface (health, unmatched paths) get
    /// a generic descriptor; the instrumentation scope is the whole
    /// router, not an allow-list.
    pub fn describe(request: &Request) -> Self {
        let route = request.extensions().get::<MatchedPath>().map(MatchedPath::as_str);
        let verb = request.method();

        let (target, method) = match route {
            Some("/api/v1/categories") if verb == http::Method::GET => (CATEGORY_TARGET, "find_all"),
            Some("/api/v1/categories") if verb == http::Method::POST => (CATEGORY_TARGET, "save"),
            Some("/api/v1/categories/{id}") if verb == http::Method::GET => (CATEGORY_TARGET, "find_by_id"),
            _ => (FALLBACK_TARGET, "dispatch"),
        };

        let mut args = route.map_or_else(Vec::new, |template| path_args(template, request.uri().path()));

        // Body-bearing calls carry a payload summary; the body itself is
        // not readable here without buffering it
        if let Some(length) = request
            .headers()
            .get(http::header::CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
        {
            args.push(format!("body={length}B"));
        }

        Self { target, method, args }
    }
}

/// Pair route template parameters with their values, in declaration order
fn path_args(template: &str, path: &str) -> Vec<String> {
    template
        .split('/')
        .zip(path.split('/'))
        .filter(|(segment, _)| segment.starts_with('{'))
        .map(|(segment, value)| {
            let name = segment.trim_matches(|c| c == '{' || c == '}');
            format!("{name}={value}")
        })
        .collect()
}

/// Wrap every handler call with ordered start/args/duration/end records
///
/// The wrapped call's outcome is forwarded unchanged. A response still
/// carrying a [`Failure`] is a propagated failure: timing and end
/// records are skipped and the failure continues to the normalizer.
pub async fn instrument_handlers(request: Request, next: Next) -> Response {
    let invocation = Invocation::describe(&request);

    tracing::info!(handler = invocation.target, method = invocation.method, status = "start");
    tracing::info!(method = invocation.method, args = ?invocation.args, "executing handler");

    let started = Instant::now();
    let response = next.run(request).await;

    if response.extensions().get::<Failure>().is_some() {
        return response;
    }

    let elapsed_millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(handler = invocation.target, method = invocation.method, elapsed_millis);
    tracing::info!(handler = invocation.target, method = invocation.method, status = "end");

    response
}
