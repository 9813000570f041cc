use domain_model::{FormBinding, FormBindings, FormKind};
use ui_page_api::PageApi;
use ui_rest_api::endpoints::submit_form;

pub fn render_page(page: &dyn PageApi, bindings: &FormBindings) -> String {
    let forms = bindings
        .iter()
        .map(|binding| render_form(page, binding))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Ticker</title>\n</head>\n<body>\n{forms}\n</body>\n</html>\n"
    )
}

fn render_form(page: &dyn PageApi, binding: &FormBinding) -> String {
    let (heading, button) = match binding.kind {
        FormKind::LatestPrice => ("Latest price", "Get latest price"),
        FormKind::PriceSpread => ("Price spread", "Get price spread"),
    };
    let inputs = [
        ("symbol", binding.symbol.as_str()),
        ("period", binding.period.as_str()),
        ("interval", binding.interval.as_str()),
    ]
    .iter()
    .map(|(name, selector)| {
        let required = if *name == "symbol" { " required" } else { "" };
        format!(
            "<input id=\"{}\" name=\"{name}\" placeholder=\"{name}\" value=\"{}\"{required}>",
            id(selector),
            escape(&page.value(selector)),
        )
    })
    .collect::<Vec<_>>()
    .join("\n");

    let chart = binding
        .chart
        .as_deref()
        .map(|selector| {
            let markup = page
                .html(selector)
                .map(|html| format!("<iframe srcdoc=\"{}\" width=\"100%\" height=\"640\"></iframe>", escape(&html)))
                .unwrap_or_default();
            format!("\n<div id=\"{}\">{markup}</div>", id(selector))
        })
        .unwrap_or_default();

    format!(
        "<div id=\"{form_id}\">\n<h2>{heading}</h2>\n<form action=\"{action}\" method=\"get\">\n{inputs}\n<button type=\"submit\">{button}</button>\n</form>\n<pre id=\"{result_id}\">{result}</pre>{chart}\n</div>",
        form_id = escape(&binding.id),
        action = submit_form(&binding.id),
        result_id = id(&binding.result),
        result = escape(&page.text(&binding.result)),
    )
}

fn id(selector: &str) -> String {
    escape(selector.trim_start_matches('#'))
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use ui_inmemory_page::InMemoryPage;
    use ui_rest_api::page::{default_bindings, CHART, LATEST_PRICE_RESULT, SYMBOL};

    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_page_shows_inputs_results_and_chart() {
        let page = InMemoryPage::default();
        page.set_value(SYMBOL, "AT&T");
        page.set_text(LATEST_PRICE_RESULT, r#"["2024-01-02",17.1]"#);
        page.set_html(CHART, "<html><body>chart</body></html>");

        let html = render_page(&page, &default_bindings());

        assert!(html.contains("<form action=\"/forms/get_latest_price_form\" method=\"get\">"));
        assert!(html.contains("<input id=\"symbol\" name=\"symbol\" placeholder=\"symbol\" value=\"AT&amp;T\" required>"));
        assert!(html.contains("<input id=\"symbol_spread\" name=\"symbol\""));
        assert!(html.contains("<pre id=\"latest_price_result\">[&quot;2024-01-02&quot;,17.1]</pre>"));
        assert!(html.contains("<pre id=\"price_spread_result\"></pre>"));
        assert!(html.contains("srcdoc=\"&lt;html&gt;&lt;body&gt;chart&lt;/body&gt;&lt;/html&gt;\""));
    }

    #[test]
    fn test_page_without_chart_has_empty_container() {
        let page = InMemoryPage::default();
        let html = render_page(&page, &default_bindings());
        assert!(html.contains("<div id=\"chart\"></div>"));
    }
}
