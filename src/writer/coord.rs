use std::fmt::Write;

use geo_traits::{CoordTrait, Dimensions};

use crate::element::Element;

/// Append a single coordinate to `out` as `x,y` or `x,y,z`.
///
/// KML coordinates are longitude, latitude, and an optional altitude. An M
/// value has no KML representation and is always dropped. The altitude is
/// written only when the coordinate's dimensions carry a Z component and the
/// value is nonzero; in KML a missing altitude means ground level, so a zero
/// altitude is omitted.
///
/// Numbers print in their shortest round-trip decimal form, without an
/// exponent and without a trailing `.0` for integral values.
pub(crate) fn encode_coord(coord: &impl CoordTrait<T = f64>, out: &mut String) {
    write!(out, "{},{}", coord.x(), coord.y()).unwrap();
    match coord.dim() {
        Dimensions::Xy | Dimensions::Xym | Dimensions::Unknown(2) => {}
        Dimensions::Xyz
        | Dimensions::Xyzm
        | Dimensions::Unknown(3)
        | Dimensions::Unknown(4) => {
            let z = coord.nth_or_panic(2);
            if z != 0.0 {
                write!(out, ",{z}").unwrap();
            }
        }
        dim => panic!("unsupported coordinate dimensions: {dim:?}"),
    }
}

/// Build a `coordinates` element from a coordinate sequence, one `x,y[,z]`
/// tuple per coordinate, space-separated. An empty sequence yields an empty
/// text leaf.
pub(crate) fn encode_coords(
    coords: impl ExactSizeIterator<Item = impl CoordTrait<T = f64>>,
) -> Element {
    let mut out = String::new();
    let num_coords = coords.len();
    for (idx, coord) in coords.enumerate() {
        encode_coord(&coord, &mut out);
        if idx < num_coords - 1 {
            out.push(' ');
        }
    }
    Element::with_text("coordinates", out)
}
