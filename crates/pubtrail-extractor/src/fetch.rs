//! HTTP page loading

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use pubtrail_domain::{ArticleLink, PageLoader};
use tracing::debug;

/// Loads article and listing pages over HTTP
///
/// One attempt per page; a failed load is reported to the caller, which
/// records it as a failure instead of retrying.
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    /// Create a loader with the configured user agent and timeout
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pubtrail_extractor::{ExtractorConfig, HttpLoader};
    ///
    /// let loader = HttpLoader::new(&ExtractorConfig::default()).unwrap();
    /// ```
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { client })
    }
}

impl PageLoader for HttpLoader {
    type Error = ExtractorError;

    async fn load(&self, link: &ArticleLink) -> Result<String, ExtractorError> {
        debug!("GET {}", link);
        let response = self.client.get(link.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractorError::Status {
                status: status.as_u16(),
                url: link.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
