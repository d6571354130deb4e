use geo_traits::GeometryCollectionTrait;

use crate::element::Element;
use crate::writer::geometry::encode_geometry;

/// Encode a GeometryCollection as a KML `MultiGeometry` element, encoding
/// each member recursively.
pub fn encode_geometry_collection(geom: &impl GeometryCollectionTrait<T = f64>) -> Element {
    let children = geom
        .geometries()
        .map(|geometry| encode_geometry(&geometry))
        .collect();
    Element::new("MultiGeometry", children)
}

#[cfg(test)]
mod test {
    use wkt::wkt;

    use super::*;

    #[test]
    fn mixed_members() {
        let element = encode_geometry_collection(&wkt! { GEOMETRYCOLLECTION (
            POINT (1. 2.),
            LINESTRING (0. 0., 1. 1.)
        ) });
        assert_eq!(
            element.to_xml(),
            "<MultiGeometry>\
             <Point><coordinates>1,2</coordinates></Point>\
             <LineString><coordinates>0,0 1,1</coordinates></LineString>\
             </MultiGeometry>"
        );
    }
}
