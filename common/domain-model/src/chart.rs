use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plotly figure: traces plus layout. Handlers pass it through untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ChartDescription {
    pub data: Vec<Value>,
    #[serde(default)]
    pub layout: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartDescription {
    pub fn new(data: Vec<Value>, layout: Map<String, Value>) -> Self {
        Self {
            data,
            layout,
            extra: Map::new(),
        }
    }

    pub fn parse(graph_json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(graph_json)
    }
}

/// Body of the price spread endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceSpread {
    #[serde(rename = "graphJSON")]
    pub graph_json: String,
    pub data: Value,
}
