// crates/geobound-core/src/boundary.rs

//! # Boundary Records
//!
//! The in-memory, table-like view of a boundary file: one row per GeoJSON
//! feature, with the geometry in one column and the feature properties
//! spread over the attribute columns.

use geojson::feature::Id;
use geojson::{Feature, GeoJson, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Axis-aligned bounding box in the coordinate system of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    fn point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// One row of a [`BoundaryRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub id: Option<Id>,
    pub geometry: Option<Geometry>,
    pub properties: JsonObject,
}

impl BoundaryFeature {
    pub fn property(&self, key: &str) -> Option<&JsonValue> {
        self.properties.get(key)
    }

    /// String property, e.g. `shapeName` or `shapeISO` in geoBoundaries files.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(JsonValue::as_str)
    }

    /// GeoJSON type name of the geometry, e.g. `"MultiPolygon"`.
    pub fn geometry_kind(&self) -> Option<&'static str> {
        self.geometry.as_ref().map(|g| kind_name(&g.value))
    }

    pub fn bbox(&self) -> Option<BBox> {
        let mut bbox = None;
        if let Some(g) = &self.geometry {
            visit_positions(&g.value, &mut |x, y| match bbox.as_mut() {
                Some(b) => BBox::include(b, x, y),
                None => bbox = Some(BBox::point(x, y)),
            });
        }
        bbox
    }
}

impl From<Feature> for BoundaryFeature {
    fn from(f: Feature) -> Self {
        Self {
            id: f.id,
            geometry: f.geometry,
            properties: f.properties.unwrap_or_default(),
        }
    }
}

/// A tabular collection of boundary features read from one cache file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundaryRecord {
    source: Option<PathBuf>,
    features: Vec<BoundaryFeature>,
}

impl BoundaryRecord {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        Self {
            source: None,
            features,
        }
    }

    /// Builds a record from any GeoJSON document. A lone `Feature` or
    /// `Geometry` becomes a single row.
    pub fn from_geojson(doc: GeoJson) -> Self {
        let features = match doc {
            GeoJson::FeatureCollection(fc) => {
                fc.features.into_iter().map(Into::into).collect()
            }
            GeoJson::Feature(f) => vec![f.into()],
            GeoJson::Geometry(g) => vec![BoundaryFeature {
                id: None,
                geometry: Some(g),
                properties: JsonObject::new(),
            }],
        };
        Self::new(features)
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// The file this record was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<BoundaryFeature> {
        self.features
    }

    /// Attribute column names, in the order they are first seen.
    pub fn columns(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for f in &self.features {
            for key in f.properties.keys() {
                if !out.contains(&key.as_str()) {
                    out.push(key);
                }
            }
        }
        out
    }

    /// One value per row; `None` where the row lacks the attribute.
    pub fn column(&self, key: &str) -> Vec<Option<&JsonValue>> {
        self.features.iter().map(|f| f.property(key)).collect()
    }

    /// Row count per geometry type. Rows without geometry are not counted.
    pub fn geometry_kinds(&self) -> BTreeMap<&'static str, usize> {
        let mut kinds = BTreeMap::new();
        for kind in self.features.iter().filter_map(BoundaryFeature::geometry_kind) {
            *kinds.entry(kind).or_insert(0) += 1;
        }
        kinds
    }

    pub fn bbox(&self) -> Option<BBox> {
        self.features
            .iter()
            .filter_map(BoundaryFeature::bbox)
            .reduce(|mut acc, b| {
                acc.include(b.min_x, b.min_y);
                acc.include(b.max_x, b.max_y);
                acc
            })
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn visit_positions(value: &Value, f: &mut dyn FnMut(f64, f64)) {
    let mut visit = |pos: &[f64]| {
        if let [x, y, ..] = pos {
            f(*x, *y);
        }
    };
    match value {
        Value::Point(p) => visit(p.as_slice()),
        Value::MultiPoint(ps) | Value::LineString(ps) => {
            ps.iter().for_each(|p| visit(p.as_slice()))
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines
            .iter()
            .flatten()
            .for_each(|p| visit(p.as_slice())),
        Value::MultiPolygon(polys) => polys
            .iter()
            .flatten()
            .flatten()
            .for_each(|p| visit(p.as_slice())),
        Value::GeometryCollection(gs) => {
            for g in gs {
                visit_positions(&g.value, f);
            }
        }
    }
}
