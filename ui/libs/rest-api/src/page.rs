use domain_model::{FormBinding, FormBindings, FormKind};

use crate::endpoints::{GET_LATEST_PRICE, GET_PRICE_SPREAD};

pub const LATEST_PRICE_FORM_ID: &str = "get_latest_price_form";
pub const PRICE_SPREAD_FORM_ID: &str = "get_price_spread_form";

pub const SYMBOL: &str = "#symbol";
pub const PERIOD: &str = "#period";
pub const INTERVAL: &str = "#interval";
pub const SYMBOL_SPREAD: &str = "#symbol_spread";
pub const PERIOD_SPREAD: &str = "#period_spread";
pub const INTERVAL_SPREAD: &str = "#interval_spread";

pub const LATEST_PRICE_RESULT: &str = "#latest_price_result";
pub const PRICE_SPREAD_RESULT: &str = "#price_spread_result";
pub const CHART: &str = "#chart";

pub fn latest_price_binding() -> FormBinding {
    FormBinding {
        kind: FormKind::LatestPrice,
        id: LATEST_PRICE_FORM_ID.to_string(),
        symbol: SYMBOL.to_string(),
        period: PERIOD.to_string(),
        interval: INTERVAL.to_string(),
        result: LATEST_PRICE_RESULT.to_string(),
        endpoint: GET_LATEST_PRICE.to_string(),
        chart: None,
    }
}

pub fn price_spread_binding() -> FormBinding {
    FormBinding {
        kind: FormKind::PriceSpread,
        id: PRICE_SPREAD_FORM_ID.to_string(),
        symbol: SYMBOL_SPREAD.to_string(),
        period: PERIOD_SPREAD.to_string(),
        interval: INTERVAL_SPREAD.to_string(),
        result: PRICE_SPREAD_RESULT.to_string(),
        endpoint: GET_PRICE_SPREAD.to_string(),
        chart: Some(CHART.to_string()),
    }
}

pub fn default_bindings() -> FormBindings {
    FormBindings {
        latest_price: latest_price_binding(),
        price_spread: price_spread_binding(),
    }
}
