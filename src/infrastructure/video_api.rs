use color_eyre::eyre::{Result, WrapErr};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::domain::video::{Video, VideosResponse};

/// Characters escaped in the `search` query value, same as JavaScript's `encodeURIComponent`
const SEARCH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// HTTP client for the video listing endpoint
#[derive(Debug, Clone)]
pub struct VideoApi {
    client: Client,
    endpoint: String,
}

impl VideoApi {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        // No request timeout: a slow fetch keeps the loader up until it settles
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `<endpoint>?search=<encoded search>`; an empty search is sent as `search=`
    pub fn request_url(&self, search: &str) -> String {
        format!(
            "{}?search={}",
            self.endpoint,
            utf8_percent_encode(search, SEARCH_VALUE)
        )
    }

    /// Fetches the videos matching `search`.
    ///
    /// Without a token the request goes out unauthenticated and the server's
    /// rejection surfaces as an error. Any non-2xx status is an error.
    #[instrument(skip(self, token), fields(authenticated = token.is_some()))]
    pub async fn fetch_videos(&self, search: &str, token: Option<&SecretString>) -> Result<Vec<Video>> {
        let url = self.request_url(search);
        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .wrap_err_with(|| format!("Request to {} failed", self.endpoint))?
            .error_for_status()?;
        debug!(status = %response.status(), "videos response");

        let body: VideosResponse = response
            .json()
            .await
            .wrap_err("Unexpected videos response body")?;
        Ok(body.into_videos())
    }
}
