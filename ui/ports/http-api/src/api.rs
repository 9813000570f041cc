use async_trait::async_trait;

use domain_model::{FetchError, PriceQuery};

#[async_trait]
pub trait HttpApi: Send + Sync + 'static {
    /// Issues one GET to `endpoint` with `query` as the query string and returns the body.
    /// Only transport failures are reported here, decoding the body is up to the caller.
    async fn get(&self, endpoint: &str, query: &PriceQuery) -> Result<String, FetchError>;
}
