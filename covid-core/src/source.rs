use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::Result;

pub mod http;

pub use http::HttpSource;

/// Something that can hand back the raw text behind a URL.
#[async_trait]
pub trait CsvSource: Send + Sync + Debug {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
