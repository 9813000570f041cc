use std::sync::Arc;

use async_trait::async_trait;

use domain_model::{FormBindings, SubmitEvent};
use ui_chart_renderer_api::ChartRendererApi;
use ui_http_api::HttpApi;

#[async_trait]
pub trait UiApi: Send + Sync + 'static {
    /// Registers one handler per form. Forms that already have a handler keep it.
    fn initialize(
        &self,
        bindings: FormBindings,
        http: Arc<dyn HttpApi>,
        renderer: Arc<dyn ChartRendererApi>,
    );

    /// Dispatches `event` to the handler of its form and waits until the handler has settled.
    async fn dispatch(&self, event: SubmitEvent) -> SubmitEvent;

    /// Submits `form` with whatever its inputs currently hold on the page.
    async fn submit(&self, form: &str) -> SubmitEvent {
        self.dispatch(SubmitEvent::new(form)).await
    }

    fn registered_forms(&self) -> Vec<String>;
}
