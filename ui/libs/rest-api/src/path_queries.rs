use serde::{Deserialize, Serialize};

use domain_model::PriceQuery;

/// Query string of both backend endpoints and of the form submission route.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PriceQueryParams {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub interval: String,
}

impl From<&PriceQuery> for PriceQueryParams {
    fn from(value: &PriceQuery) -> Self {
        Self {
            symbol: value.symbol.clone(),
            period: value.period.clone(),
            interval: value.interval.clone(),
        }
    }
}

impl From<PriceQueryParams> for PriceQuery {
    fn from(value: PriceQueryParams) -> Self {
        Self {
            symbol: value.symbol,
            period: value.period,
            interval: value.interval,
        }
    }
}

impl PriceQueryParams {
    pub fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}
