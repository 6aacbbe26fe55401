//! Boundary GeoJSON: just enough of the format to draw region outlines,
//! plus a fitted projection into an SVG viewbox.

use std::fmt::Write;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::map_type::MapType;
use crate::regions::Registry;

/// Feature properties checked, in order, for something the registry can resolve.
const ID_PROPERTIES: &[&str] = &[
    "id", "iso_a2", "ISO_A2", "postal", "code", "name", "NAME", "nam_ja", "nom",
];

const FIT_PADDING: f64 = 0.05;

type Ring = Vec<Vec<f64>>;

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Unsupported,
}

/// How a boundary feature relates to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureMatch {
    Region(&'static str),
    Excluded,
    Unknown,
}

impl Feature {
    fn candidate_keys(&self) -> impl Iterator<Item = String> + '_ {
        let id = self.id.as_ref().and_then(value_key);
        let props = ID_PROPERTIES.iter().filter_map(move |key| {
            self.properties
                .as_ref()
                .and_then(|props| props.get(*key))
                .and_then(value_key)
        });
        id.into_iter().chain(props)
    }

    /// Resolve this feature to a region id through its id and well-known properties.
    pub fn region_match(&self, registry: &Registry) -> FeatureMatch {
        for key in self.candidate_keys() {
            if registry.is_excluded(&key) {
                return FeatureMatch::Excluded;
            }
            if let Some(id) = registry.resolve(&key) {
                return FeatureMatch::Region(id);
            }
        }
        FeatureMatch::Unknown
    }

    fn rings(&self) -> Vec<&Ring> {
        match &self.geometry {
            Some(Geometry::Polygon { coordinates }) => coordinates.iter().collect(),
            Some(Geometry::MultiPolygon { coordinates }) => {
                coordinates.iter().flat_map(|polygon| polygon.iter()).collect()
            }
            Some(Geometry::Unsupported) | None => Vec::new(),
        }
    }
}

fn value_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Keep maps that straddle the antimeridian contiguous.
pub fn wrap_longitude(map: MapType, lon: f64) -> f64 {
    match map {
        // Aleutians sit just west of 180.
        MapType::Usa if lon > 0.0 => lon - 360.0,
        // Chukotka sits just east of -180.
        MapType::Asia if lon < -30.0 => lon + 360.0,
        _ => lon,
    }
}

/// Equirectangular projection, scaled by the cosine of the mid latitude and
/// fitted into a `width` x `height` viewbox with the north up.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    map: MapType,
    lon_scale: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    /// Fit to every coordinate in `features`. `None` when there is nothing to fit.
    pub fn fit(map: MapType, features: &[&Feature], width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let points = || {
            features
                .iter()
                .flat_map(|feature| feature.rings())
                .flat_map(|ring| ring.iter())
                .filter(|pos| pos.len() >= 2)
                .map(|pos| (wrap_longitude(map, pos[0]), pos[1]))
        };

        let (min_lat, max_lat) = points().fold((f64::MAX, f64::MIN), |(lo, hi), (_, lat)| {
            (lo.min(lat), hi.max(lat))
        });
        if min_lat > max_lat {
            return None;
        }
        let lon_scale = ((min_lat + max_lat) / 2.0).to_radians().cos().max(0.1);

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for (lon, lat) in points() {
            let (x, y) = (lon * lon_scale, -lat);
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let world_w = (max_x - min_x).max(f64::EPSILON);
        let world_h = (max_y - min_y).max(f64::EPSILON);
        let scale_x = width / (world_w * (1.0 + FIT_PADDING * 2.0));
        let scale_y = height / (world_h * (1.0 + FIT_PADDING * 2.0));
        let scale = scale_x.min(scale_y);

        let center_x = (min_x + max_x) / 2.0;
        let center_y = (min_y + max_y) / 2.0;
        Some(Self {
            map,
            lon_scale,
            scale,
            offset_x: width / 2.0 - center_x * scale,
            offset_y: height / 2.0 - center_y * scale,
        })
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = wrap_longitude(self.map, lon) * self.lon_scale;
        (x * self.scale + self.offset_x, -lat * self.scale + self.offset_y)
    }

    /// SVG path data for a feature's polygons.
    pub fn svg_path(&self, feature: &Feature) -> String {
        let mut d = String::new();
        for ring in feature.rings() {
            let mut first = true;
            for pos in ring.iter().filter(|pos| pos.len() >= 2) {
                let (x, y) = self.project(pos[0], pos[1]);
                let cmd = if first { 'M' } else { 'L' };
                let _ = write!(d, "{cmd}{x:.1},{y:.1}");
                first = false;
            }
            if !first {
                d.push('Z');
            }
        }
        d
    }
}

/// A region outline ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub id: &'static str,
    pub name: &'static str,
    pub path: String,
}

/// Project every rateable feature in `collection`. Features sharing a region
/// id are merged into one shape; excluded and unrecognised features are dropped.
pub fn project_regions(
    registry: &Registry,
    collection: &FeatureCollection,
    width: f64,
    height: f64,
) -> Vec<RegionShape> {
    let matched: Vec<(&'static str, &Feature)> = collection
        .features
        .iter()
        .filter_map(|feature| match feature.region_match(registry) {
            FeatureMatch::Region(id) => Some((id, feature)),
            FeatureMatch::Excluded => None,
            FeatureMatch::Unknown => {
                tracing::debug!(map = %registry.map_type, id = ?feature.id, "unmatched boundary feature");
                None
            }
        })
        .collect();

    let features: Vec<&Feature> = matched.iter().map(|(_, feature)| *feature).collect();
    let Some(projection) = Projection::fit(registry.map_type, &features, width, height) else {
        return Vec::new();
    };

    let mut shapes: Vec<RegionShape> = Vec::new();
    for (id, feature) in matched {
        let path = projection.svg_path(feature);
        if path.is_empty() {
            continue;
        }
        match shapes.iter_mut().find(|shape| shape.id == id) {
            Some(shape) => shape.path.push_str(&path),
            None => shapes.push(RegionShape {
                id,
                name: registry.name(id),
                path,
            }),
        }
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::registry;

    fn square(name: &str, lon: f64, lat: f64, size: f64) -> String {
        format!(
            r#"{{"type":"Feature","properties":{{"name":"{name}"}},"geometry":{{"type":"Polygon","coordinates":[[[{lon},{lat}],[{lon2},{lat}],[{lon2},{lat2}],[{lon},{lat2}],[{lon},{lat}]]]}}}}"#,
            lon2 = lon + size,
            lat2 = lat + size,
        )
    }

    fn collection(features: &[String]) -> FeatureCollection {
        let json = format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        );
        serde_json::from_str(&json).expect("parse collection")
    }

    #[test]
    fn features_resolve_through_id_and_properties() {
        let usa = registry(MapType::Usa);
        let by_name: Feature =
            serde_json::from_str(r#"{"properties":{"name":"Texas"}}"#).expect("parse");
        assert_eq!(by_name.region_match(usa), FeatureMatch::Region("TX"));

        let by_fips: Feature = serde_json::from_str(r#"{"id":"06"}"#).expect("parse");
        assert_eq!(by_fips.region_match(usa), FeatureMatch::Region("CA"));

        let japan = registry(MapType::Japan);
        let numeric: Feature = serde_json::from_str(r#"{"id":1}"#).expect("parse");
        assert_eq!(numeric.region_match(japan), FeatureMatch::Region("01"));

        let nothing: Feature =
            serde_json::from_str(r#"{"properties":{"name":"Puerto Rico"}}"#).expect("parse");
        assert_eq!(nothing.region_match(usa), FeatureMatch::Unknown);
    }

    #[test]
    fn micro_states_are_excluded() {
        let europe = registry(MapType::Europe);
        let monaco: Feature =
            serde_json::from_str(r#"{"properties":{"NAME":"Monaco"}}"#).expect("parse");
        assert_eq!(monaco.region_match(europe), FeatureMatch::Excluded);
    }

    #[test]
    fn unsupported_geometry_is_tolerated() {
        let feature: Feature = serde_json::from_str(
            r#"{"properties":{"name":"Ohio"},"geometry":{"type":"Point","coordinates":[1,2]}}"#,
        )
        .expect("parse");
        assert!(matches!(feature.geometry, Some(Geometry::Unsupported)));
        assert!(feature.rings().is_empty());
    }

    #[test]
    fn projection_fits_inside_viewbox() {
        let fc = collection(&[
            square("Kansas", -100.0, 37.0, 3.0),
            square("Ohio", -84.0, 39.0, 2.0),
        ]);
        let features: Vec<&Feature> = fc.features.iter().collect();
        let projection = Projection::fit(MapType::Usa, &features, 800.0, 600.0).expect("fit");

        for feature in &fc.features {
            for ring in feature.rings() {
                for pos in ring {
                    let (x, y) = projection.project(pos[0], pos[1]);
                    assert!((0.0..=800.0).contains(&x), "x out of range: {x}");
                    assert!((0.0..=600.0).contains(&y), "y out of range: {y}");
                }
            }
        }

        // North is up.
        let (_, south) = projection.project(-100.0, 37.0);
        let (_, north) = projection.project(-100.0, 40.0);
        assert!(north < south);
    }

    #[test]
    fn projecting_regions_merges_and_skips() {
        let fc = collection(&[
            square("Hawaii", -160.0, 19.0, 1.0),
            square("Hawaii", -157.0, 21.0, 0.5),
            square("Puerto Rico", -66.0, 18.0, 1.0),
        ]);
        let shapes = project_regions(registry(MapType::Usa), &fc, 400.0, 300.0);

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].id, "HI");
        assert_eq!(shapes[0].name, "Hawaii");
        assert_eq!(shapes[0].path.matches('M').count(), 2);
        assert!(shapes[0].path.ends_with('Z'));
    }

    #[test]
    fn empty_collection_projects_nothing() {
        let fc = collection(&[]);
        assert!(project_regions(registry(MapType::Canada), &fc, 400.0, 300.0).is_empty());
    }

    #[test]
    fn aleutians_wrap_west() {
        assert_eq!(wrap_longitude(MapType::Usa, 179.0), -181.0);
        assert_eq!(wrap_longitude(MapType::Usa, -120.0), -120.0);
        assert_eq!(wrap_longitude(MapType::Asia, -170.0), 190.0);
        assert_eq!(wrap_longitude(MapType::Europe, -20.0), -20.0);
    }
}
