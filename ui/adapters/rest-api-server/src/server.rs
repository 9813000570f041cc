use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tracing::{debug, info};

use domain_model::{FormBindings, PriceQuery, SubmitEvent};
use ui_core_api::UiApi;
use ui_page_api::PageApi;
use ui_rest_api::endpoints::{GET_PAGE, GET_SUBMIT_FORM};
use ui_rest_api::path_queries::PriceQueryParams;

use crate::html::render_page;

#[derive(Clone)]
struct AppState {
    ui: Arc<dyn UiApi>,
    page: Arc<dyn PageApi>,
    bindings: Arc<FormBindings>,
}

pub fn router(ui: Arc<dyn UiApi>, page: Arc<dyn PageApi>, bindings: FormBindings) -> Router {
    let state = AppState {
        ui,
        page,
        bindings: Arc::new(bindings),
    };
    Router::new()
        .route(GET_PAGE, get(get_page))
        .route(GET_SUBMIT_FORM, get(submit_form))
        .with_state(state)
}

pub async fn run(
    port: u16,
    ui: Arc<dyn UiApi>,
    page: Arc<dyn PageApi>,
    bindings: FormBindings,
) -> Result<()> {
    let router = router(ui, page, bindings);
    let address = SocketAddr::new(IpAddr::from([0, 0, 0, 0]), port);
    info!("Serving page on '{address}'");
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await?;
    Ok(())
}

async fn get_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.page.as_ref(), &state.bindings))
}

async fn submit_form(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    Query(query): Query<PriceQueryParams>,
) -> Response {
    let Some(binding) = state.bindings.find(&form_id) else {
        debug!("Unknown form '{form_id}'");
        return StatusCode::NOT_FOUND.into_response();
    };
    let query = PriceQuery::from(query);
    state.page.set_value(&binding.symbol, &query.symbol);
    state.page.set_value(&binding.period, &query.period);
    state.page.set_value(&binding.interval, &query.interval);

    let event = state
        .ui
        .dispatch(SubmitEvent::with_form_data(&binding.form(), query))
        .await;
    debug!("Form '{form_id}' settled, default prevented: {}", event.default_prevented());
    Redirect::to(GET_PAGE).into_response()
}
