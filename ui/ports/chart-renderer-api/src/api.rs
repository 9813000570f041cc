use anyhow::Result;

use domain_model::ChartDescription;

pub trait ChartRendererApi: Send + Sync + 'static {
    /// Draws `chart` into `container`, replacing whatever the container showed before.
    fn render(&self, container: &str, chart: &ChartDescription) -> Result<()>;
}
