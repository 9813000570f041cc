use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::trace;

use domain_model::error::{STATUS_ERROR, STATUS_TIMEOUT};
use domain_model::{FetchError, PriceQuery};
use ui_http_api::HttpApi;
use ui_rest_api::path_queries::PriceQueryParams;

pub struct QuoteRestClient {
    url: String,
    client: Client,
}

impl QuoteRestClient {
    pub fn new(url: &str) -> Self {
        let mut url = String::from(url.trim_end_matches('/'));
        if !url.starts_with("http") {
            url = format!("http://{url}");
        }
        Self {
            url,
            client: Client::new(),
        }
    }

    fn request_url(&self, endpoint: &str, query: &PriceQuery) -> Result<Url, FetchError> {
        let endpoint = format!("{}{}", self.url, endpoint);
        let mut url = Url::parse(&endpoint).map_err(|err| FetchError::transport(STATUS_ERROR, err))?;
        let query = PriceQueryParams::from(query)
            .encode()
            .map_err(|err| FetchError::transport(STATUS_ERROR, err))?;
        url.set_query(Some(&query));
        Ok(url)
    }
}

#[async_trait]
impl HttpApi for QuoteRestClient {
    async fn get(&self, endpoint: &str, query: &PriceQuery) -> Result<String, FetchError> {
        let url = self.request_url(endpoint, query)?;
        trace!("Request url: {url:?}");
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or(status.as_str());
            return Err(FetchError::transport(STATUS_ERROR, reason));
        }
        response.text().await.map_err(transport_error)
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    let status = if err.is_timeout() {
        STATUS_TIMEOUT
    } else {
        STATUS_ERROR
    };
    FetchError::transport(status, err)
}
