use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use ui_charming_renderer::CharmingRenderer;
use ui_config::CONFIG;
use ui_core::Ui;
use ui_core_api::UiApi;
use ui_inmemory_page::InMemoryPage;
use ui_rest_api::page::default_bindings;
use ui_rest_client::QuoteRestClient;

pub async fn run() -> Result<()> {
    info!("▶ ui running...");
    let page = Arc::new(InMemoryPage::default());
    let http = Arc::new(QuoteRestClient::new(&CONFIG.backend.url));
    let renderer = Arc::new(CharmingRenderer::new(
        page.clone(),
        &CONFIG.chart.title,
        CONFIG.chart.width,
        CONFIG.chart.height,
    ));

    let ui = Ui::new(page.clone()).with_sequencing(CONFIG.ui.sequencing);
    ui.initialize(default_bindings(), http, renderer);
    info!("Backend: '{}', forms: {:?}", CONFIG.backend.url, ui.registered_forms());

    ui_rest_api_server::run(CONFIG.application.port, Arc::new(ui), page, default_bindings()).await
}
