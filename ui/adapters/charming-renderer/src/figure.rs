use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::warn;

use domain_model::ChartDescription;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Line,
    Markers,
    Bar,
    Candlestick,
}

/// Plotly trace fields the renderer understands.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Trace {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub mode: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "column")]
    pub x: Vec<Value>,
    #[serde(deserialize_with = "column")]
    pub y: Vec<Value>,
    #[serde(deserialize_with = "column")]
    pub open: Vec<Value>,
    #[serde(deserialize_with = "column")]
    pub high: Vec<Value>,
    #[serde(deserialize_with = "column")]
    pub low: Vec<Value>,
    #[serde(deserialize_with = "column")]
    pub close: Vec<Value>,
}

/// A trace column: a plain array, or a typed array with base64 little-endian `bdata`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Column {
    Values(Vec<Value>),
    Typed { dtype: String, bdata: String },
}

fn column<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    match Column::deserialize(deserializer)? {
        Column::Values(values) => Ok(values),
        Column::Typed { dtype, bdata } => decode_typed(&dtype, &bdata).map_err(D::Error::custom),
    }
}

fn decode_typed(dtype: &str, bdata: &str) -> Result<Vec<Value>, String> {
    let width = match dtype {
        "i1" | "u1" | "u1c" => 1,
        "i2" | "u2" => 2,
        "i4" | "u4" | "f4" => 4,
        "f8" => 8,
        other => return Err(format!("unsupported dtype '{other}'")),
    };
    let bytes = STANDARD
        .decode(bdata)
        .map_err(|err| format!("invalid bdata: {err}"))?;
    if bytes.len() % width != 0 {
        return Err(format!("{} bytes is not a whole number of '{dtype}'", bytes.len()));
    }
    Ok(bytes
        .chunks_exact(width)
        .map(|chunk| match dtype {
            "i1" => Value::from(i8::from_le_bytes(le(chunk))),
            "u1" | "u1c" => Value::from(chunk[0]),
            "i2" => Value::from(i16::from_le_bytes(le(chunk))),
            "u2" => Value::from(u16::from_le_bytes(le(chunk))),
            "i4" => Value::from(i32::from_le_bytes(le(chunk))),
            "u4" => Value::from(u32::from_le_bytes(le(chunk))),
            "f4" => Value::from(f32::from_le_bytes(le(chunk))),
            _ => Value::from(f64::from_le_bytes(le(chunk))),
        })
        .collect())
}

fn le<const N: usize>(chunk: &[u8]) -> [u8; N] {
    let mut bytes = [0; N];
    bytes.copy_from_slice(chunk);
    bytes
}

impl Trace {
    pub fn kind(&self) -> Option<TraceKind> {
        match self.type_.as_deref().unwrap_or("scatter") {
            "scatter" | "scattergl" => {
                if self.mode.as_deref() == Some("markers") {
                    Some(TraceKind::Markers)
                } else {
                    Some(TraceKind::Line)
                }
            }
            "bar" => Some(TraceKind::Bar),
            "candlestick" | "ohlc" => Some(TraceKind::Candlestick),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match self.kind() {
            Some(TraceKind::Candlestick) => self.close.len(),
            _ => self.y.len(),
        }
    }

    /// Rows of `[open, close, low, high]`, the order candlestick series expect.
    pub fn candles(&self) -> Vec<Vec<f64>> {
        (0..self.close.len())
            .map(|i| {
                [&self.open, &self.close, &self.low, &self.high]
                    .iter()
                    .map(|column| column.get(i).and_then(Value::as_f64).unwrap_or(f64::NAN))
                    .collect()
            })
            .collect()
    }
}

/// Traces that can be drawn, in figure order, each with its legend label.
pub fn traces(chart: &ChartDescription) -> Vec<(String, Trace)> {
    chart
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value::<Trace>(value.clone()) {
            Ok(trace) if trace.kind().is_some() => {
                let name = trace.name.clone().unwrap_or_else(|| format!("trace {i}"));
                Some((name, trace))
            }
            Ok(trace) => {
                warn!("Unsupported trace type '{}' skipped", trace.type_.unwrap_or_default());
                None
            }
            Err(err) => {
                warn!("Trace #{i} skipped: '{err}'");
                None
            }
        })
        .collect()
}

/// Category axis values, taken from the first trace that has `x`, or indices otherwise.
pub fn categories(traces: &[(String, Trace)]) -> Vec<String> {
    match traces.iter().find(|(_, trace)| !trace.x.is_empty()) {
        Some((_, trace)) => trace.x.iter().map(label).collect(),
        None => {
            let len = traces.iter().map(|(_, trace)| trace.len()).max().unwrap_or(0);
            (0..len).map(|i| i.to_string()).collect()
        }
    }
}

pub fn title(layout: &Map<String, Value>) -> Option<String> {
    match layout.get("title")? {
        Value::String(text) => Some(text.clone()),
        Value::Object(title) => title.get("text").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}

pub fn label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
