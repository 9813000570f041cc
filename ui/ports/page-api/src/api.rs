/// Elements of the page, addressed by selector. Mutations replace content in place.
pub trait PageApi: Send + Sync + 'static {
    /// Current value of an input control, empty when the control is unknown.
    fn value(&self, selector: &str) -> String;
    fn set_value(&self, selector: &str, value: &str);
    fn text(&self, selector: &str) -> String;
    fn set_text(&self, selector: &str, text: &str);
    fn html(&self, selector: &str) -> Option<String>;
    fn set_html(&self, selector: &str, html: &str);
}
