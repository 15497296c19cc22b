//! HTTP transport with bounded retry.

mod client;
mod retry;

pub use client::HttpClient;
pub use retry::{RETRY_DELAY_MS, RetryPolicy};
