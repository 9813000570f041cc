use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use domain_model::{FormBinding, Sequencing, SubmitEvent};
use ui_chart_renderer_api::ChartRendererApi;
use ui_http_api::HttpApi;
use ui_page_api::PageApi;

use crate::generation::Generations;
use crate::handlers::{form_data, report_failure, FormHandler};
use crate::response::{decode_price_spread, display};

pub struct PriceSpreadHandler {
    binding: FormBinding,
    page: Arc<dyn PageApi>,
    http: Arc<dyn HttpApi>,
    renderer: Arc<dyn ChartRendererApi>,
    generations: Generations,
}

impl PriceSpreadHandler {
    pub fn new(
        binding: FormBinding,
        page: Arc<dyn PageApi>,
        http: Arc<dyn HttpApi>,
        renderer: Arc<dyn ChartRendererApi>,
        sequencing: Sequencing,
    ) -> Self {
        Self {
            binding,
            page,
            http,
            renderer,
            generations: Generations::new(sequencing),
        }
    }
}

#[async_trait]
impl FormHandler for PriceSpreadHandler {
    async fn handle(&self, event: &mut SubmitEvent) {
        event.prevent_default();
        let query = form_data(&self.binding, self.page.as_ref(), event);
        let generation = self.generations.issue();
        debug!("Price spread request #{generation}: '{query:?}'");

        let result = self
            .http
            .get(&self.binding.endpoint, &query)
            .await
            .and_then(|body| decode_price_spread(&body));

        if !self.generations.is_current(generation) {
            debug!("Price spread request #{generation} superseded, response dropped");
            return;
        }
        match result {
            Ok((chart, data)) => {
                match &self.binding.chart {
                    Some(container) => {
                        if let Err(err) = self.renderer.render(container, &chart) {
                            error!("Error during chart rendering: '{err}'");
                        }
                    }
                    None => warn!("No chart container bound to form '{}'", self.binding.id),
                }
                self.page.set_text(&self.binding.result, &display(&data));
            }
            Err(err) => report_failure(self.page.as_ref(), &self.binding.result, &err),
        }
    }
}
