use geo_traits::MultiLineStringTrait;

use crate::element::Element;
use crate::writer::linestring::encode_line_string;

/// Encode a MultiLineString geometry as a KML `MultiGeometry` element with
/// one `LineString` child per member.
pub fn encode_multi_line_string(geom: &impl MultiLineStringTrait<T = f64>) -> Element {
    let children = geom
        .line_strings()
        .map(|line_string| encode_line_string(&line_string))
        .collect();
    Element::new("MultiGeometry", children)
}

#[cfg(test)]
mod test {
    use wkt::wkt;

    use super::*;

    #[test]
    fn xyz() {
        let element = encode_multi_line_string(&wkt! { MULTILINESTRING Z (
            (1. 2. 3., 4. 5. 6.),
            (7. 8. 9., 10. 11. 12.)
        ) });
        assert_eq!(
            element.to_xml(),
            "<MultiGeometry>\
             <LineString><coordinates>1,2,3 4,5,6</coordinates></LineString>\
             <LineString><coordinates>7,8,9 10,11,12</coordinates></LineString>\
             </MultiGeometry>"
        );
    }
}
