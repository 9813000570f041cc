use std::sync::Arc;

use anyhow::{anyhow, Result};
use charming::component::{Axis, DataZoom, DataZoomType, Grid, Legend, Title};
use charming::datatype::{CompositeValue, DataPoint};
use charming::element::{
    AreaStyle, AxisPointer, AxisPointerType, AxisType, DataBackground, LineStyle, SplitLine,
    TextStyle, Tooltip, Trigger,
};
use charming::series::{Bar, Candlestick, Line, Scatter};
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use serde_json::Value;
use tracing::debug;

use domain_model::ChartDescription;
use ui_chart_renderer_api::ChartRendererApi;
use ui_page_api::PageApi;

use crate::figure::{categories, label, title, traces, Trace, TraceKind};

pub struct CharmingRenderer {
    page: Arc<dyn PageApi>,
    title: String,
    width: u64,
    height: u64,
}

impl CharmingRenderer {
    pub fn new(page: Arc<dyn PageApi>, title: &str, width: u64, height: u64) -> Self {
        Self {
            page,
            title: title.to_string(),
            width,
            height,
        }
    }
}

impl ChartRendererApi for CharmingRenderer {
    fn render(&self, container: &str, chart: &ChartDescription) -> Result<()> {
        let title = title(&chart.layout).unwrap_or_else(|| self.title.clone());
        let html = HtmlRenderer::new(title.as_str(), self.width, self.height)
            .theme(Theme::Default)
            .render(&build_chart(chart))
            .map_err(|err| anyhow!("Error during chart rendering: {err:?}"))?;
        debug!("Rendered {} traces into '{container}'", chart.data.len());
        self.page.set_html(container, &html);
        Ok(())
    }
}

fn build_chart(description: &ChartDescription) -> Chart {
    let traces = traces(description);
    let mut chart = build_base_chart();
    if let Some(title) = title(&description.layout) {
        chart = chart.title(Title::new().text(title));
    }
    chart = add_legend(chart, &traces);
    let categories = categories(&traces);
    chart = add_series(chart, traces, &categories);
    add_x_axis(chart, categories)
}

fn build_base_chart() -> Chart {
    Chart::new()
        .tooltip(
            Tooltip::new().trigger(Trigger::Axis).axis_pointer(
                AxisPointer::new()
                    .animation(true)
                    .type_(AxisPointerType::Cross),
            ),
        )
        .y_axis(
            Axis::new()
                .scale(true)
                .split_line(SplitLine::new().show(false)),
        )
        .grid(Grid::new().bottom(80))
        .data_zoom(
            DataZoom::new()
                .text_style(TextStyle::new().color("#8392A5"))
                .data_background(
                    DataBackground::new()
                        .area_style(AreaStyle::new().color("#8392A5"))
                        .line_style(LineStyle::new().color("#8392A5")),
                )
                .brush_select(true),
        )
        .data_zoom(DataZoom::new().type_(DataZoomType::Inside))
}

fn add_legend(chart: Chart, traces: &[(String, Trace)]) -> Chart {
    let legend: Vec<String> = traces.iter().map(|(name, _)| name.clone()).collect();
    chart.legend(Legend::new().inactive_color("#777").data(legend))
}

fn add_x_axis(chart: Chart, categories: Vec<String>) -> Chart {
    chart.x_axis(Axis::new().type_(AxisType::Category).data(categories))
}

fn add_series(mut chart: Chart, traces: Vec<(String, Trace)>, categories: &[String]) -> Chart {
    for (name, trace) in traces {
        chart = match trace.kind() {
            Some(TraceKind::Line) => chart.series(Line::new().name(name).data(values(&trace.y))),
            Some(TraceKind::Bar) => chart.series(Bar::new().name(name).data(values(&trace.y))),
            Some(TraceKind::Markers) => {
                chart.series(Scatter::new().name(name).data(pairs(&trace, categories)))
            }
            Some(TraceKind::Candlestick) => {
                chart.series(Candlestick::new().name(name).data(trace.candles()))
            }
            None => chart,
        };
    }
    chart
}

/// One point per category, with `-` marking a gap.
fn values(ys: &[Value]) -> Vec<DataPoint> {
    ys.iter()
        .map(|y| match y.as_f64() {
            Some(y) => DataPoint::from(y),
            None => DataPoint::from("-"),
        })
        .collect()
}

fn pairs(trace: &Trace, categories: &[String]) -> Vec<DataPoint> {
    trace
        .y
        .iter()
        .enumerate()
        .filter_map(|(i, y)| {
            let x = trace
                .x
                .get(i)
                .map(label)
                .or_else(|| categories.get(i).cloned())?;
            let y = y.as_f64()?;
            Some(DataPoint::from(vec![CompositeValue::from(x), CompositeValue::from(y)]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use ui_inmemory_page::InMemoryPage;

    use super::*;

    fn renderer(page: Arc<InMemoryPage>) -> CharmingRenderer {
        CharmingRenderer::new(page, "Price Spread", 1200, 600)
    }

    fn figure() -> ChartDescription {
        serde_json::from_value(json!({
            "data": [
                {"type": "scatter", "mode": "lines", "name": "AAPL close", "x": ["2024-01-02", "2024-01-03"], "y": [185.64, null]},
                {"type": "bar", "name": "AAPL volume", "y": [82488700, 58414500]},
                {"type": "sunburst", "name": "ignored trace", "labels": ["a"]},
            ],
            "layout": {"title": {"text": "AAPL 5d spread"}},
        }))
        .unwrap()
    }

    #[test]
    fn test_render_writes_markup_into_container() {
        let page = Arc::new(InMemoryPage::default());
        renderer(page.clone()).render("#chart", &figure()).unwrap();

        let html = page.html("#chart").unwrap();
        assert!(html.contains("AAPL 5d spread"));
        assert!(html.contains("AAPL close"));
        assert!(html.contains("AAPL volume"));
        assert!(html.contains("2024-01-03"));
        assert!(!html.contains("ignored trace"));
    }

    #[test]
    fn test_render_replaces_previous_chart() {
        let page = Arc::new(InMemoryPage::default());
        let renderer = renderer(page.clone());
        renderer.render("#chart", &figure()).unwrap();
        let first = page.html("#chart").unwrap();

        renderer
            .render("#chart", &ChartDescription::new(vec![], Default::default()))
            .unwrap();
        let replaced = page.html("#chart").unwrap();
        assert!(!replaced.contains("AAPL close"));
        assert!(replaced.contains("Price Spread"));

        renderer.render("#chart", &figure()).unwrap();
        assert_eq!(page.html("#chart").unwrap(), first);
    }

    #[test]
    fn test_pairs_skip_missing_points() {
        let trace: Trace = serde_json::from_value(json!({
            "mode": "markers",
            "y": [1.0, null, 3.0],
        }))
        .unwrap();
        let categories = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(pairs(&trace, &categories).len(), 2);
        assert_eq!(values(&trace.y).len(), 3);
    }
}
