use geo_traits::PointTrait;

use crate::element::Element;
use crate::writer::coord::encode_coord;

/// Encode a Point geometry as a KML `Point` element.
///
/// An empty point still carries a `coordinates` element, holding the
/// degenerate position `0,0`.
pub fn encode_point(geom: &impl PointTrait<T = f64>) -> Element {
    let mut out = String::new();
    if let Some(coord) = geom.coord() {
        encode_coord(&coord, &mut out);
    } else {
        out.push_str("0,0");
    }
    Element::new("Point", vec![Element::with_text("coordinates", out)])
}
