use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use domain_model::{FormBinding, Sequencing, SubmitEvent};
use ui_http_api::HttpApi;
use ui_page_api::PageApi;

use crate::generation::Generations;
use crate::handlers::{form_data, report_failure, FormHandler};
use crate::response::{decode_latest_price, display};

pub struct LatestPriceHandler {
    binding: FormBinding,
    page: Arc<dyn PageApi>,
    http: Arc<dyn HttpApi>,
    generations: Generations,
}

impl LatestPriceHandler {
    pub fn new(
        binding: FormBinding,
        page: Arc<dyn PageApi>,
        http: Arc<dyn HttpApi>,
        sequencing: Sequencing,
    ) -> Self {
        Self {
            binding,
            page,
            http,
            generations: Generations::new(sequencing),
        }
    }
}

#[async_trait]
impl FormHandler for LatestPriceHandler {
    async fn handle(&self, event: &mut SubmitEvent) {
        event.prevent_default();
        let query = form_data(&self.binding, self.page.as_ref(), event);
        let generation = self.generations.issue();
        debug!("Latest price request #{generation}: '{query:?}'");

        let result = self
            .http
            .get(&self.binding.endpoint, &query)
            .await
            .and_then(|body| decode_latest_price(&body));

        if !self.generations.is_current(generation) {
            debug!("Latest price request #{generation} superseded, response dropped");
            return;
        }
        match result {
            Ok(value) => self.page.set_text(&self.binding.result, &display(&value)),
            Err(err) => report_failure(self.page.as_ref(), &self.binding.result, &err),
        }
    }
}
