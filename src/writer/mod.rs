mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometry::encode_geometry;
pub use geometrycollection::encode_geometry_collection;
pub use linestring::encode_line_string;
pub use multilinestring::encode_multi_line_string;
pub use multipoint::encode_multi_point;
pub use multipolygon::encode_multi_polygon;
pub use point::encode_point;
pub use polygon::encode_polygon;
