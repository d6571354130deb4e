use geo_traits::MultiPointTrait;

use crate::element::Element;
use crate::writer::point::encode_point;

/// Encode a MultiPoint geometry as a KML `MultiGeometry` element with one
/// `Point` child per member.
pub fn encode_multi_point(geom: &impl MultiPointTrait<T = f64>) -> Element {
    let children = geom.points().map(|point| encode_point(&point)).collect();
    Element::new("MultiGeometry", children)
}
