use async_trait::async_trait;
use tracing::error;

use domain_model::{FetchError, FormBinding, PriceQuery, SubmitEvent, REQUEST_FAILED_MESSAGE};
use ui_page_api::PageApi;

pub use latest_price::LatestPriceHandler;
pub use price_spread::PriceSpreadHandler;

mod latest_price;
mod price_spread;

#[async_trait]
pub trait FormHandler: Send + Sync + 'static {
    async fn handle(&self, event: &mut SubmitEvent);
}

/// Values submitted with the event, or the form inputs as they are on the page now.
fn form_data(binding: &FormBinding, page: &dyn PageApi, event: &SubmitEvent) -> PriceQuery {
    match event.form_data() {
        Some(query) => query.clone(),
        None => binding.query(|selector| page.value(selector)),
    }
}

fn report_failure(page: &dyn PageApi, result: &str, err: &FetchError) {
    error!("Request Failed: {err}");
    page.set_text(result, REQUEST_FAILED_MESSAGE);
}
