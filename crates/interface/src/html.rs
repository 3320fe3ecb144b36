use scraper::{Html, Selector};

/// Locates the element holding a translation on a scraped page.
#[derive(Clone, Copy, Debug)]
pub struct ElementQuery {
    pub tag: &'static str,
    pub attr: &'static str,
    pub value: &'static str,
}

impl ElementQuery {
    /// `class` matches any of the element's classes, other attributes match
    /// exactly.
    pub fn css(&self) -> String {
        match self.attr {
            "class" => format!(r#"{}[class~="{}"]"#, self.tag, self.value),
            attr => format!(r#"{}[{}="{}"]"#, self.tag, attr, self.value),
        }
    }
}

/// Trimmed text of the first element matching `query`.
pub fn find_text(html: &str, query: &ElementQuery) -> Option<String> {
    let css = query.css();
    let selector = match Selector::parse(&css) {
        Ok(selector) => selector,
        Err(err) => {
            log::warn!("invalid selector {css}: {err}");
            return None;
        }
    };
    let document = Html::parse_document(html);
    let element = document.select(&selector).next()?;
    Some(element.text().collect::<String>().trim().to_owned())
}
