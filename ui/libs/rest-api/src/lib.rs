pub mod page;
pub mod path_queries;

pub mod endpoints {
    pub const GET_LATEST_PRICE: &str = "/get_latest_price";
    pub const GET_PRICE_SPREAD: &str = "/get_price_spread_plotly";

    pub const GET_PAGE: &str = "/";
    pub const GET_SUBMIT_FORM: &str = "/forms/:form_id";

    pub fn submit_form(form_id: &str) -> String {
        GET_SUBMIT_FORM.replace(":form_id", form_id)
    }
}
