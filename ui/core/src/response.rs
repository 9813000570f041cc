use serde_json::{Number, Value};

use domain_model::{ChartDescription, FetchError, PriceSpread};

pub fn decode_latest_price(body: &str) -> Result<Value, FetchError> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_price_spread(body: &str) -> Result<(ChartDescription, Value), FetchError> {
    let spread: PriceSpread = serde_json::from_str(body)?;
    let chart = ChartDescription::parse(&spread.graph_json)?;
    Ok((chart, spread.data))
}

/// Compact JSON text. Integral floats print without a fraction (`187.0` as `187`).
pub fn display(value: &Value) -> String {
    integral(value.clone()).to_string()
}

/// Largest magnitude below which every integral `f64` is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn integral(value: Value) -> Value {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(float)
                if number.is_f64() && float.fract() == 0.0 && float.abs() < MAX_EXACT_INTEGER =>
            {
                Value::Number(Number::from(float as i64))
            }
            _ => Value::Number(number),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(integral).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key, integral(value)))
                .collect(),
        ),
        other => other,
    }
}
