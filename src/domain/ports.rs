use std::time::Duration;

use crate::domain::model::{LetterContext, Official};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Writes `data` to `path`, creating parent directories and overwriting.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn attendees_path(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
}

/// Raw access to a representative directory. Failures are reported as errors.
#[async_trait]
pub trait RepresentativeLookup: Send + Sync {
    async fn lookup(&self, zipcode: &str) -> Result<Vec<Official>>;
}

pub trait LetterRenderer: Send + Sync {
    fn render(&self, context: &LetterContext<'_>) -> Result<String>;
}
