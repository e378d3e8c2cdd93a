//! Map embed subsystem.
//!
//! Provides the provider registry, the declarative per-provider snippet
//! rules, and the template selector that turns a coordinate into markup.

pub mod config;
pub mod providers;
pub mod selector;
pub mod template;
pub mod types;

pub use config::EmbedConfig;
pub use providers::{display_name, list_providers, ProviderEntry};
pub use selector::{render, TemplateSelector};
pub use types::{AxisOrder, Coordinate, EmbedError, MarkupFragment, ProviderKey};
