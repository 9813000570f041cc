use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use chart::{ChartDescription, PriceSpread};
pub use error::FetchError;
pub use form::{FormBinding, FormBindings, FormKind};

pub mod chart;
pub mod error;
pub mod form;

pub const REQUEST_FAILED_MESSAGE: &str = "Request failed, check console for details.";

/// Values of the three input controls of a form, read once per submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceQuery {
    pub symbol: String,
    pub period: String,
    pub interval: String,
}

impl PriceQuery {
    pub fn new(symbol: &str, period: &str, interval: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            period: period.to_string(),
            interval: interval.to_string(),
        }
    }
}

/// Submission event handed to a form handler.
///
/// An event may carry the values the form was submitted with. Handlers use
/// those instead of reading the inputs back from the page.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    form: String,
    form_data: Option<PriceQuery>,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: &str) -> Self {
        Self {
            form: form.to_string(),
            form_data: None,
            default_prevented: false,
        }
    }

    pub fn with_form_data(form: &str, form_data: PriceQuery) -> Self {
        Self {
            form_data: Some(form_data),
            ..Self::new(form)
        }
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn form_data(&self) -> Option<&PriceQuery> {
        self.form_data.as_ref()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Which of several overlapping responses of one handler ends up on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sequencing {
    /// Every response updates the page, so whichever settles last stays visible.
    #[default]
    LastSettled,
    /// Only the response of the most recently issued request updates the page.
    LatestIssued,
}

impl fmt::Display for Sequencing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequencing::LastSettled => write!(f, "last-settled"),
            Sequencing::LatestIssued => write!(f, "latest-issued"),
        }
    }
}

impl FromStr for Sequencing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-settled" => Ok(Sequencing::LastSettled),
            "latest-issued" => Ok(Sequencing::LatestIssued),
            other => Err(format!("Unknown sequencing mode: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_event_prevent_default() {
        let mut event = SubmitEvent::new("#get_latest_price_form form");
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
        assert_eq!(event.form(), "#get_latest_price_form form");
        assert_eq!(event.form_data(), None);
    }

    #[test]
    fn test_submit_event_carries_form_data() {
        let event = SubmitEvent::with_form_data("#f form", PriceQuery::new("AAPL", "5d", "1h"));
        assert_eq!(event.form(), "#f form");
        assert_eq!(event.form_data(), Some(&PriceQuery::new("AAPL", "5d", "1h")));
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_sequencing_from_str() {
        assert_eq!(Sequencing::from_str("last-settled").unwrap(), Sequencing::LastSettled);
        assert_eq!(Sequencing::from_str("latest-issued").unwrap(), Sequencing::LatestIssued);
        assert!(Sequencing::from_str("first").is_err());
        assert_eq!(Sequencing::default().to_string(), "last-settled");
    }
}
