//! Handlebars registry holding the container and every provider body.
//!
//! Built once per process. Strict mode turns a missing slot into an error and
//! escaping is off: snippets are emitted verbatim.

use super::providers::{CONTAINER_TEMPLATE, PROVIDER_RULES};
use super::types::EmbedError;
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::OnceLock;

/// Registry name of the shared container element.
pub const CONTAINER: &str = "container";

static REGISTRY: OnceLock<Result<Handlebars<'static>, String>> = OnceLock::new();

fn build() -> Result<Handlebars<'static>, String> {
    let mut h = Handlebars::new();
    h.set_strict_mode(true);
    h.register_escape_fn(handlebars::no_escape);
    h.register_template_string(CONTAINER, CONTAINER_TEMPLATE)
        .map_err(|e| e.to_string())?;
    for rule in PROVIDER_RULES {
        h.register_template_string(rule.key.as_str(), rule.body)
            .map_err(|e| format!("{}: {}", rule.key, e))?;
    }
    Ok(h)
}

fn registry() -> Result<&'static Handlebars<'static>, EmbedError> {
    REGISTRY
        .get_or_init(build)
        .as_ref()
        .map_err(|e| EmbedError::Template(e.clone()))
}

/// Render the registered template `name` with `data`.
pub fn render<T: Serialize>(name: &str, data: &T) -> Result<String, EmbedError> {
    registry()?
        .render(name, data)
        .map_err(|e| EmbedError::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_context() -> serde_json::Value {
        json!({
            "container": "map",
            "width": "100%",
            "height": "400px",
            "first": "1.5",
            "second": "-2",
            "zoom": 15,
        })
    }

    #[test]
    fn test_all_templates_register() {
        let h = registry().unwrap();
        assert!(h.has_template(CONTAINER));
        for rule in PROVIDER_RULES {
            assert!(h.has_template(rule.key.as_str()), "{}", rule.key);
        }
    }

    #[test]
    fn test_every_body_renders_with_full_context() {
        for rule in PROVIDER_RULES {
            let out = render(rule.key.as_str(), &full_context()).unwrap();
            assert!(!out.contains("{{"), "{}", rule.key);
            assert!(out.contains("1.5, -2"), "{}", rule.key);
        }
    }

    #[test]
    fn test_single_braces_are_literal() {
        let out = render("osm", &full_context()).unwrap();
        assert!(out.contains("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {\n"));
        let out = render("google", &full_context()).unwrap();
        assert!(out.contains("var location = {lat: 1.5, lng: -2};"));
    }

    #[test]
    fn test_no_html_escaping() {
        let ctx = json!({"container": "a'b<c>", "width": "100%", "height": "400px"});
        let out = render(CONTAINER, &ctx).unwrap();
        assert_eq!(out, "<div id='a'b<c>' style='width: 100%; height: 400px;'></div>");
    }

    #[test]
    fn test_missing_slot_is_an_error() {
        let err = render("bing", &json!({"container": "map", "first": "1"})).unwrap_err();
        assert!(matches!(err, EmbedError::Template(_)));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        assert!(render("here", &full_context()).is_err());
    }
}
