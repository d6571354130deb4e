//! Encode geometries as KML elements.
//!
//! Any geometry implementing the [geo-traits](geo_traits) accessor traits is
//! encoded into an [`Element`] tree holding the KML representation of its
//! structure. The tree carries no attributes and no namespaces; serializing
//! it to text is left to the caller.
//!
//! KML coordinates are two- or three-dimensional. An M value has no KML
//! representation and is dropped from every layout that carries one; a zero
//! altitude is omitted, since in KML a missing altitude means ground level.
//!
//! ```
//! use std::str::FromStr;
//!
//! use geo_kml::encode_geometry;
//! use wkt::Wkt;
//!
//! let geom = Wkt::<f64>::from_str("POINT ZM (1 2 3 4)").unwrap();
//! let element = encode_geometry(&geom);
//! assert_eq!(element.tag(), "Point");
//! assert_eq!(element.children()[0].tag(), "coordinates");
//! assert_eq!(element.children()[0].text(), Some("1,2,3"));
//! ```

#![warn(missing_docs)]

mod element;
mod writer;

pub use element::Element;
pub use writer::{
    encode_geometry, encode_geometry_collection, encode_line_string, encode_multi_line_string,
    encode_multi_point, encode_multi_polygon, encode_point, encode_polygon,
};
