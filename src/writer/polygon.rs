use geo_traits::{LineStringTrait, PolygonTrait};

use crate::element::Element;
use crate::writer::coord::encode_coords;

/// Encode a Polygon geometry as a KML `Polygon` element.
///
/// The exterior ring becomes an `outerBoundaryIs` element and each interior
/// ring an `innerBoundaryIs` element, in ring order. A polygon with no rings
/// yields a childless `Polygon` element.
pub fn encode_polygon(geom: &impl PolygonTrait<T = f64>) -> Element {
    let mut children = Vec::with_capacity(1 + geom.num_interiors());
    if let Some(exterior) = geom.exterior() {
        children.push(encode_boundary("outerBoundaryIs", &exterior));
    }
    for interior in geom.interiors() {
        children.push(encode_boundary("innerBoundaryIs", &interior));
    }
    Element::new("Polygon", children)
}

fn encode_boundary(tag: &'static str, ring: &impl LineStringTrait<T = f64>) -> Element {
    let linear_ring = Element::new("LinearRing", vec![encode_coords(ring.coords())]);
    Element::new(tag, vec![linear_ring])
}
