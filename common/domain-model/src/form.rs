use serde::{Deserialize, Serialize};

use crate::PriceQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FormKind {
    LatestPrice,
    PriceSpread,
}

/// Page elements and backend endpoint one form handler works with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormBinding {
    pub kind: FormKind,
    /// Id of the element wrapping the form.
    pub id: String,
    pub symbol: String,
    pub period: String,
    pub interval: String,
    pub result: String,
    pub endpoint: String,
    pub chart: Option<String>,
}

impl FormBinding {
    /// Selector the submission event is dispatched on.
    pub fn form(&self) -> String {
        format!("#{} form", self.id)
    }

    pub fn query(&self, read: impl Fn(&str) -> String) -> PriceQuery {
        PriceQuery {
            symbol: read(&self.symbol),
            period: read(&self.period),
            interval: read(&self.interval),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormBindings {
    pub latest_price: FormBinding,
    pub price_spread: FormBinding,
}

impl FormBindings {
    pub fn iter(&self) -> impl Iterator<Item = &FormBinding> {
        [&self.latest_price, &self.price_spread].into_iter()
    }

    pub fn find(&self, id: &str) -> Option<&FormBinding> {
        self.iter().find(|binding| binding.id == id)
    }
}
