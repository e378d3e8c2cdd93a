//! Template selector: provider key in, snippet out.
//!
//! Flow: normalize key (empty → default provider) → table lookup → render the
//! container and the provider's body. Unknown keys fall back to the container
//! plus a "not supported" paragraph.

use super::config::EmbedConfig;
use super::providers::{self, UNSUPPORTED_BODY};
use super::template;
use super::types::{Coordinate, EmbedError, MarkupFragment, ProviderKey};
use serde_json::json;

/// Renders map snippets. Holds only immutable settings; share freely.
#[derive(Debug, Clone, Default)]
pub struct TemplateSelector {
    config: EmbedConfig,
}

impl TemplateSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmbedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Resolve a caller-supplied key. Only the empty string means the
    /// configured default; anything else must name a provider.
    pub fn select(&self, provider: &str) -> Result<ProviderKey, EmbedError> {
        if provider.is_empty() {
            return Ok(self.config.default_provider);
        }
        provider.parse()
    }

    /// Render the snippet for `provider`. Never fails: unknown providers
    /// produce the fallback fragment.
    pub fn render(&self, coord: Coordinate, provider: &str) -> MarkupFragment {
        match self.try_render(coord, provider) {
            Ok(fragment) => fragment,
            Err(e @ EmbedError::UnsupportedProvider(_)) => {
                log::debug!("{}; rendering fallback", e);
                self.unsupported()
            }
            Err(e) => {
                log::error!("{}; rendering fallback", e);
                self.unsupported()
            }
        }
    }

    /// Like [`render`](Self::render), but reports unknown providers as errors.
    pub fn try_render(&self, coord: Coordinate, provider: &str) -> Result<MarkupFragment, EmbedError> {
        let key = self.select(provider)?;
        self.render_key(coord, key)
    }

    pub fn render_key(&self, coord: Coordinate, key: ProviderKey) -> Result<MarkupFragment, EmbedError> {
        let rule = providers::rule_for(key);
        log::debug!("rendering {} at ({}, {})", rule.key, coord.lat, coord.lon);

        let (first, second) = coord.ordered(rule.order);
        let data = json!({
            "container": self.config.container_id,
            "first": first.to_string(),
            "second": second.to_string(),
            "zoom": rule.zoom,
        });

        let mut html = self.container()?;
        html.push_str(&template::render(key.as_str(), &data)?);
        Ok(MarkupFragment::new(html, Some(key)))
    }

    fn container(&self) -> Result<String, EmbedError> {
        let data = json!({
            "container": self.config.container_id,
            "width": self.config.width,
            "height": self.config.height,
        });
        template::render(template::CONTAINER, &data)
    }

    fn unsupported(&self) -> MarkupFragment {
        let mut html = self.container().unwrap_or_else(|e| {
            log::error!("{}", e);
            String::new()
        });
        html.push_str(UNSUPPORTED_BODY);
        MarkupFragment::new(html, None)
    }
}

/// Render with default settings.
pub fn render(latitude: f64, longitude: f64, provider: &str) -> MarkupFragment {
    TemplateSelector::new().render(Coordinate::new(latitude, longitude), provider)
}
