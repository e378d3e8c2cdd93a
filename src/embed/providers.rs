//! Provider table: display names and snippet rules for every supported map.
//!
//! One static table serves both the registry and the selector, so a provider
//! cannot be listed without a rule or rendered without being listed.

use super::types::{AxisOrder, ProviderKey};
use serde::Serialize;

/// Container element shared by every provider.
pub const CONTAINER_TEMPLATE: &str =
    "<div id='{{container}}' style='width: {{width}}; height: {{height}};'></div>";

/// Body emitted after the container when no provider matches.
pub const UNSUPPORTED_BODY: &str = "<p>Provider not supported.</p>";

/// Container id used when none is configured.
pub const DEFAULT_CONTAINER_ID: &str = "map";
pub const DEFAULT_WIDTH: &str = "100%";
pub const DEFAULT_HEIGHT: &str = "400px";

/// A declarative snippet rule.
///
/// `body` is appended to the container and may use the slots `container`,
/// `first`, `second` and `zoom`. `first`/`second` receive the coordinate in
/// `order`.
pub struct ProviderRule {
    pub key: ProviderKey,
    pub name: &'static str,
    pub order: AxisOrder,
    pub zoom: u8,
    /// URL that only this provider's snippet references.
    pub signature: &'static str,
    pub body: &'static str,
}

const GOOGLE: &str = "<script>
    function initMap() {
      var location = {lat: {{first}}, lng: {{second}}};
      var map = new google.maps.Map(document.getElementById('{{container}}'), {
        zoom: {{zoom}},
        center: location
      });
      var marker = new google.maps.Marker({
        position: location,
        map: map
      });
    }
</script>
<script src='https://maps.googleapis.com/maps/api/js?key=YOUR_GOOGLE_API_KEY&callback=initMap' async defer></script>";

const CEDARMAPS: &str = "<link href='https://api.cedarmaps.com/cedarmaps.js/v1.8.1/cedarmaps.css' rel='stylesheet' />
<script src='https://api.cedarmaps.com/cedarmaps.js/v1.8.1/cedarmaps.js'></script>
<script>
    L.cedarmaps.accessToken = 'YOUR_CEDAR_ACCESS_TOKEN';
    var map = L.cedarmaps.map('{{container}}', 'https://api.cedarmaps.com/v1/tiles/cedarmaps.streets.json?access_token=YOUR_CEDAR_ACCESS_TOKEN', {
      center: [{{first}}, {{second}}],
      zoom: {{zoom}}
    });
    var marker = L.marker([{{first}}, {{second}}]).addTo(map);
</script>";

const NESHAN: &str = "<link href='https://static.neshan.org/sdk/leaflet/1.4.0/leaflet.css' rel='stylesheet' type='text/css'>
<script src='https://static.neshan.org/sdk/leaflet/1.4.0/leaflet.js' type='text/javascript'></script>
<script>
    var map = new L.Map('{{container}}', {
        key: 'YOUR_NESHAN_API_KEY',
        maptype: 'dreamy',
        poi: true,
        traffic: false,
        center: [{{first}}, {{second}}],
        zoom: {{zoom}}
    });
    var marker = L.marker([{{first}}, {{second}}]).addTo(map);
</script>";

const MAPIR: &str = "<script src='https://cdn.map.ir/web-sdk/1.4.2/mapbox-gl.js'></script>
<link rel='stylesheet' href='https://cdn.map.ir/web-sdk/1.4.2/mapbox-gl.css' />
<script>
    mapboxgl.accessToken = 'YOUR_MAPIR_ACCESS_TOKEN';
    var map = new mapboxgl.Map({
      container: '{{container}}',
      style: 'https://map.ir/vector/styles/main/mapir-xyz-light-style.json',
      center: [{{first}}, {{second}}],
      zoom: {{zoom}}
    });
    new mapboxgl.Marker().setLngLat([{{first}}, {{second}}]).addTo(map);
</script>";

const PARSIMAP: &str = "<script src='https://api.parsimap.com/web/v1/js/main.js'></script>
<script>
    var map = L.map('{{container}}').setView([{{first}}, {{second}}], {{zoom}});
    L.tileLayer('https://api.parsimap.com/tile/parsimap-streets-v1/{z}/{x}/{y}.png?key=YOUR_PARSIMAP_KEY', {
        maxZoom: 18,
    }).addTo(map);
    var marker = L.marker([{{first}}, {{second}}]).addTo(map);
</script>";

const MAPBOX: &str = "<script src='https://api.mapbox.com/mapbox-gl-js/v2.5.0/mapbox-gl.js'></script>
<link href='https://api.mapbox.com/mapbox-gl-js/v2.5.0/mapbox-gl.css' rel='stylesheet' />
<script>
    mapboxgl.accessToken = 'YOUR_MAPBOX_ACCESS_TOKEN';
    var map = new mapboxgl.Map({
      container: '{{container}}',
      style: 'mapbox://styles/mapbox/streets-v11',
      center: [{{first}}, {{second}}],
      zoom: {{zoom}}
    });
    new mapboxgl.Marker().setLngLat([{{first}}, {{second}}]).addTo(map);
</script>";

const OSM: &str = "<link rel='stylesheet' href='https://unpkg.com/leaflet@1.7.1/dist/leaflet.css' />
<script src='https://unpkg.com/leaflet@1.7.1/dist/leaflet.js'></script>
<script>
    var map = L.map('{{container}}').setView([{{first}}, {{second}}], {{zoom}});
    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '\u{a9} OpenStreetMap contributors'
    }).addTo(map);
    var marker = L.marker([{{first}}, {{second}}]).addTo(map);
</script>";

const BING: &str = "<script type='text/javascript' src='https://www.bing.com/api/maps/mapcontrol?callback=GetMap&key=YOUR_BING_MAPS_KEY' async defer></script>
<script>
    function GetMap() {
        var map = new Microsoft.Maps.Map('#{{container}}', {
            center: new Microsoft.Maps.Location({{first}}, {{second}}),
            zoom: {{zoom}}
        });
        var center = map.getCenter();
        var pin = new Microsoft.Maps.Pushpin(center, {
            title: 'Location'
        });
        map.entities.push(pin);
    }
</script>";

const YANDEX: &str = "<script src='https://api-maps.yandex.ru/2.1/?apikey=YOUR_YANDEX_API_KEY&lang=en_US' type='text/javascript'></script>
<script>
    ymaps.ready(init);
    function init(){
        var myMap = new ymaps.Map('{{container}}', {
            center: [{{first}}, {{second}}],
            zoom: {{zoom}}
        });
        var myPlacemark = new ymaps.Placemark([{{first}}, {{second}}], {
            hintContent: 'Location',
            balloonContent: 'Selected Location'
        });
        myMap.geoObjects.add(myPlacemark);
    }
</script>";

// ─── Provider table ─────────────────────────────────────────────

pub const PROVIDER_RULES: &[ProviderRule] = &[
    ProviderRule {
        key: ProviderKey::Google,
        name: "Google Maps",
        order: AxisOrder::LatLng, zoom: 15,
        signature: "https://maps.googleapis.com/maps/api/js",
        body: GOOGLE,
    },
    ProviderRule {
        key: ProviderKey::CedarMaps,
        name: "CedarMaps (Iran)",
        order: AxisOrder::LatLng, zoom: 15,
        signature: "https://api.cedarmaps.com/cedarmaps.js/v1.8.1/cedarmaps.js",
        body: CEDARMAPS,
    },
    ProviderRule {
        key: ProviderKey::Neshan,
        name: "Neshan (Iran)",
        order: AxisOrder::LatLng, zoom: 14,
        signature: "https://static.neshan.org/sdk/leaflet/1.4.0/leaflet.js",
        body: NESHAN,
    },
    ProviderRule {
        key: ProviderKey::MapIr,
        name: "Map.ir (Iran)",
        order: AxisOrder::LngLat, zoom: 15,
        signature: "https://cdn.map.ir/web-sdk/1.4.2/mapbox-gl.js",
        body: MAPIR,
    },
    ProviderRule {
        key: ProviderKey::ParsiMap,
        name: "ParsiMap (Iran)",
        order: AxisOrder::LatLng, zoom: 15,
        signature: "https://api.parsimap.com/web/v1/js/main.js",
        body: PARSIMAP,
    },
    ProviderRule {
        key: ProviderKey::Mapbox,
        name: "Mapbox",
        order: AxisOrder::LngLat, zoom: 15,
        signature: "https://api.mapbox.com/mapbox-gl-js/v2.5.0/mapbox-gl.js",
        body: MAPBOX,
    },
    ProviderRule {
        key: ProviderKey::Osm,
        name: "OpenStreetMap",
        order: AxisOrder::LatLng, zoom: 15,
        signature: "https://unpkg.com/leaflet@1.7.1/dist/leaflet.js",
        body: OSM,
    },
    ProviderRule {
        key: ProviderKey::Bing,
        name: "Bing Maps",
        order: AxisOrder::LatLng, zoom: 15,
        signature: "https://www.bing.com/api/maps/mapcontrol",
        body: BING,
    },
    ProviderRule {
        key: ProviderKey::Yandex,
        name: "Yandex Maps",
        order: AxisOrder::LatLng, zoom: 15,
        signature: "https://api-maps.yandex.ru/2.1/",
        body: YANDEX,
    },
];

/// Look up the rule for a provider.
pub fn rule_for(key: ProviderKey) -> &'static ProviderRule {
    // The table lists providers in `ProviderKey::ALL` order.
    &PROVIDER_RULES[key as usize]
}

/// Display name for a provider.
pub fn display_name(key: ProviderKey) -> &'static str {
    rule_for(key).name
}

/// A registry entry for the public provider list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderEntry {
    pub key: ProviderKey,
    pub name: &'static str,
}

/// Every supported provider with its display name, in registry order.
pub fn list_providers() -> Vec<ProviderEntry> {
    PROVIDER_RULES
        .iter()
        .map(|r| ProviderEntry { key: r.key, name: r.name })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_key_order() {
        assert_eq!(PROVIDER_RULES.len(), ProviderKey::ALL.len());
        for (rule, key) in PROVIDER_RULES.iter().zip(ProviderKey::ALL) {
            assert_eq!(rule.key, key);
            assert_eq!(rule_for(key).key, key);
        }
    }

    #[test]
    fn test_list_providers() {
        let list = list_providers();
        assert_eq!(list.len(), 9);
        let keys: Vec<&str> = list.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            ["google", "cedarmaps", "neshan", "mapir", "parsimap", "mapbox", "osm", "bing", "yandex"]
        );
        assert!(list.iter().all(|e| !e.name.is_empty()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name(ProviderKey::Osm), "OpenStreetMap");
        assert_eq!(display_name(ProviderKey::MapIr), "Map.ir (Iran)");
    }

    #[test]
    fn test_lng_first_providers() {
        let lng_first: Vec<ProviderKey> = PROVIDER_RULES
            .iter()
            .filter(|r| r.order == AxisOrder::LngLat)
            .map(|r| r.key)
            .collect();
        assert_eq!(lng_first, vec![ProviderKey::MapIr, ProviderKey::Mapbox]);
    }

    #[test]
    fn test_only_neshan_uses_zoom_14() {
        for rule in PROVIDER_RULES {
            let expected = if rule.key == ProviderKey::Neshan { 14 } else { 15 };
            assert_eq!(rule.zoom, expected, "{}", rule.key);
        }
    }

    #[test]
    fn test_signature_unique_to_its_body() {
        for rule in PROVIDER_RULES {
            assert!(rule.body.contains(rule.signature), "{}", rule.key);
            for other in PROVIDER_RULES.iter().filter(|o| o.key != rule.key) {
                assert!(!other.body.contains(rule.signature), "{} in {}", rule.key, other.key);
            }
        }
    }
}
