use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, info};

use domain_model::{FormBinding, FormBindings, FormKind, Sequencing, SubmitEvent};
use ui_chart_renderer_api::ChartRendererApi;
use ui_core_api::UiApi;
use ui_http_api::HttpApi;
use ui_page_api::PageApi;

use crate::handlers::{FormHandler, LatestPriceHandler, PriceSpreadHandler};

pub struct Ui {
    page: Arc<dyn PageApi>,
    sequencing: Sequencing,
    handlers: DashMap<String, Arc<dyn FormHandler>>,
}

impl Ui {
    pub fn new(page: Arc<dyn PageApi>) -> Self {
        Self {
            page,
            sequencing: Sequencing::default(),
            handlers: DashMap::new(),
        }
    }

    pub fn with_sequencing(mut self, sequencing: Sequencing) -> Self {
        self.sequencing = sequencing;
        self
    }

    /// Returns `false` when the form already had a handler.
    fn register(
        &self,
        binding: &FormBinding,
        http: &Arc<dyn HttpApi>,
        renderer: &Arc<dyn ChartRendererApi>,
    ) -> bool {
        let form = binding.form();
        let Entry::Vacant(entry) = self.handlers.entry(form.clone()) else {
            debug!("Handler for '{form}' already registered");
            return false;
        };
        let handler: Arc<dyn FormHandler> = match binding.kind {
            FormKind::LatestPrice => Arc::new(LatestPriceHandler::new(
                binding.clone(),
                Arc::clone(&self.page),
                Arc::clone(http),
                self.sequencing,
            )),
            FormKind::PriceSpread => Arc::new(PriceSpreadHandler::new(
                binding.clone(),
                Arc::clone(&self.page),
                Arc::clone(http),
                Arc::clone(renderer),
                self.sequencing,
            )),
        };
        entry.insert(handler);
        info!("Registered {:?} handler for '{form}' ({})", binding.kind, self.sequencing);
        true
    }
}

#[async_trait]
impl UiApi for Ui {
    fn initialize(
        &self,
        bindings: FormBindings,
        http: Arc<dyn HttpApi>,
        renderer: Arc<dyn ChartRendererApi>,
    ) {
        for binding in bindings.iter() {
            self.register(binding, &http, &renderer);
        }
    }

    async fn dispatch(&self, mut event: SubmitEvent) -> SubmitEvent {
        let handler = self
            .handlers
            .get(event.form())
            .map(|handler| Arc::clone(handler.value()));
        match handler {
            Some(handler) => handler.handle(&mut event).await,
            None => debug!("No handler registered for '{}'", event.form()),
        }
        event
    }

    fn registered_forms(&self) -> Vec<String> {
        let mut forms: Vec<_> = self.handlers.iter().map(|entry| entry.key().clone()).collect();
        forms.sort();
        forms
    }
}
