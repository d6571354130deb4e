use geo_traits::LineStringTrait;

use crate::element::Element;
use crate::writer::coord::encode_coords;

/// Encode a LineString geometry as a KML `LineString` element.
pub fn encode_line_string(geom: &impl LineStringTrait<T = f64>) -> Element {
    Element::new("LineString", vec![encode_coords(geom.coords())])
}

#[cfg(test)]
mod test {
    use wkt::wkt;

    use super::*;

    #[test]
    fn xy() {
        let element = encode_line_string(&wkt! { LINESTRING (0. 0., 1. 1.) });
        assert_eq!(
            element.to_xml(),
            "<LineString><coordinates>0,0 1,1</coordinates></LineString>"
        );
    }

    #[test]
    fn xyz() {
        let element = encode_line_string(&wkt! { LINESTRING Z (1. 2. 3., 4. 5. 6.) });
        assert_eq!(
            element.to_xml(),
            "<LineString><coordinates>1,2,3 4,5,6</coordinates></LineString>"
        );
    }

    #[test]
    fn xym_drops_measure() {
        let element = encode_line_string(&wkt! { LINESTRING M (1. 2. 3., 4. 5. 6.) });
        assert_eq!(
            element.to_xml(),
            "<LineString><coordinates>1,2 4,5</coordinates></LineString>"
        );
    }

    #[test]
    fn xyzm_drops_measure() {
        let element = encode_line_string(&wkt! { LINESTRING ZM (1. 2. 3. 4., 5. 6. 7. 8.) });
        assert_eq!(
            element.to_xml(),
            "<LineString><coordinates>1,2,3 5,6,7</coordinates></LineString>"
        );
    }

    #[test]
    fn empty() {
        let element = encode_line_string(&wkt! { LINESTRING EMPTY });
        assert_eq!(
            element.to_xml(),
            "<LineString><coordinates></coordinates></LineString>"
        );
    }
}
