use geo_traits::MultiPolygonTrait;

use crate::element::Element;
use crate::writer::polygon::encode_polygon;

/// Encode a MultiPolygon geometry as a KML `MultiGeometry` element with one
/// `Polygon` child per member.
pub fn encode_multi_polygon(geom: &impl MultiPolygonTrait<T = f64>) -> Element {
    let children = geom
        .polygons()
        .map(|polygon| encode_polygon(&polygon))
        .collect();
    Element::new("MultiGeometry", children)
}
