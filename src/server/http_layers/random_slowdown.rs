//! Dev-only middleware that delays every request by a random amount,
//! useful for exercising frontend loading states.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use rand::Rng;
use std::time::Duration;

pub async fn slowdown_request(request: Request<Body>, next: Next) -> Response {
    let delay_ms = rand::rng().random_range(100..600);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    next.run(request).await
}
