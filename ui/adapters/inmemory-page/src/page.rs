use dashmap::DashMap;
use tracing::trace;

use ui_page_api::PageApi;

#[derive(Debug, Default, Clone)]
struct Element {
    value: String,
    text: String,
    html: Option<String>,
}

#[derive(Default)]
pub struct InMemoryPage {
    elements: DashMap<String, Element>,
}

impl PageApi for InMemoryPage {
    fn value(&self, selector: &str) -> String {
        self.elements
            .get(selector)
            .map(|element| element.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, selector: &str, value: &str) {
        self.elements.entry(selector.to_string()).or_default().value = value.to_string();
    }

    fn text(&self, selector: &str) -> String {
        self.elements
            .get(selector)
            .map(|element| element.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&self, selector: &str, text: &str) {
        trace!("Set text of '{selector}': '{text}'");
        self.elements.entry(selector.to_string()).or_default().text = text.to_string();
    }

    fn html(&self, selector: &str) -> Option<String> {
        self.elements
            .get(selector)
            .and_then(|element| element.html.clone())
    }

    fn set_html(&self, selector: &str, html: &str) {
        trace!("Replace markup of '{selector}' ({} bytes)", html.len());
        self.elements.entry(selector.to_string()).or_default().html = Some(html.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_elements_are_empty() {
        let page = InMemoryPage::default();
        assert_eq!(page.value("#symbol"), "");
        assert_eq!(page.text("#latest_price_result"), "");
        assert_eq!(page.html("#chart"), None);
    }

    #[test]
    fn test_mutations_replace_in_place() {
        let page = InMemoryPage::default();
        page.set_value("#symbol", "AAPL");
        page.set_text("#symbol", "label");
        page.set_value("#symbol", "MSFT");
        assert_eq!(page.value("#symbol"), "MSFT");
        assert_eq!(page.text("#symbol"), "label");

        page.set_html("#chart", "<div>one</div>");
        page.set_html("#chart", "<div>two</div>");
        assert_eq!(page.html("#chart").as_deref(), Some("<div>two</div>"));
    }
}
