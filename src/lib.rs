//! Embeddable map snippets for nine web map providers.
//!
//! ```
//! let html = mapsnip::render(35.6892, 51.3890, "osm");
//! assert!(html.as_str().contains("setView([35.6892, 51.389], 15)"));
//! ```

pub mod embed;

pub use embed::{
    list_providers, render, Coordinate, EmbedConfig, EmbedError, MarkupFragment, ProviderEntry,
    ProviderKey, TemplateSelector,
};
