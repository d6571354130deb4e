use geo_traits::GeometryTrait;

use crate::element::Element;
use crate::writer::geometrycollection::encode_geometry_collection;
use crate::writer::linestring::encode_line_string;
use crate::writer::multilinestring::encode_multi_line_string;
use crate::writer::multipoint::encode_multi_point;
use crate::writer::multipolygon::encode_multi_polygon;
use crate::writer::point::encode_point;
use crate::writer::polygon::encode_polygon;

/// Encode any geometry as a KML element, dispatching on its concrete kind.
///
/// # Panics
///
/// Panics for `Rect`, `Triangle`, and `Line` inputs, which have no KML
/// representation.
pub fn encode_geometry(geom: &impl GeometryTrait<T = f64>) -> Element {
    use geo_traits::GeometryType::*;

    match geom.as_type() {
        Point(geom) => encode_point(geom),
        LineString(geom) => encode_line_string(geom),
        Polygon(geom) => encode_polygon(geom),
        MultiPoint(geom) => encode_multi_point(geom),
        MultiLineString(geom) => encode_multi_line_string(geom),
        MultiPolygon(geom) => encode_multi_polygon(geom),
        GeometryCollection(geom) => encode_geometry_collection(geom),
        Rect(_) | Triangle(_) | Line(_) => panic!("unsupported geometry type"),
    }
}
