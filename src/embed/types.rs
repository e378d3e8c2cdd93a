//! Core types for the embed subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (latitude, longitude) pair. Ranges are not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// The pair in the order a provider's SDK expects it.
    pub fn ordered(&self, order: AxisOrder) -> (f64, f64) {
        match order {
            AxisOrder::LatLng => (self.lat, self.lon),
            AxisOrder::LngLat => (self.lon, self.lat),
        }
    }
}

/// Axis order a provider's SDK consumes coordinates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrder {
    LatLng,
    LngLat,
}

/// A supported map provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKey {
    #[default]
    Google,
    CedarMaps,
    Neshan,
    MapIr,
    ParsiMap,
    Mapbox,
    Osm,
    Bing,
    Yandex,
}

impl ProviderKey {
    /// Every provider, in registry order.
    pub const ALL: [ProviderKey; 9] = [
        Self::Google,
        Self::CedarMaps,
        Self::Neshan,
        Self::MapIr,
        Self::ParsiMap,
        Self::Mapbox,
        Self::Osm,
        Self::Bing,
        Self::Yandex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::CedarMaps => "cedarmaps",
            Self::Neshan => "neshan",
            Self::MapIr => "mapir",
            Self::ParsiMap => "parsimap",
            Self::Mapbox => "mapbox",
            Self::Osm => "osm",
            Self::Bing => "bing",
            Self::Yandex => "yandex",
        }
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKey {
    type Err = EmbedError;

    /// Case-insensitive. Whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| EmbedError::UnsupportedProvider(s.to_string()))
    }
}

/// A rendered snippet, ready to be embedded in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupFragment {
    html: String,
    provider: Option<ProviderKey>,
}

impl MarkupFragment {
    pub(crate) fn new(html: String, provider: Option<ProviderKey>) -> Self {
        Self { html, provider }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// The provider that produced this fragment; `None` for the fallback.
    pub fn provider(&self) -> Option<ProviderKey> {
        self.provider
    }

    pub fn is_supported(&self) -> bool {
        self.provider.is_some()
    }
}

impl fmt::Display for MarkupFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

impl From<MarkupFragment> for String {
    fn from(fragment: MarkupFragment) -> Self {
        fragment.html
    }
}

/// Embed errors. Only surfaced by the strict entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    UnsupportedProvider(String),
    /// A snippet template failed to register or render.
    Template(String),
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedProvider(key) => {
                write!(f, "Provider not supported: '{}'", key)?;
                let known: Vec<&str> = ProviderKey::ALL.iter().map(|p| p.as_str()).collect();
                write!(f, " (known: {})", known.join(", "))
            }
            Self::Template(msg) => write!(f, "Template error: {}", msg),
        }
    }
}

impl std::error::Error for EmbedError {}
