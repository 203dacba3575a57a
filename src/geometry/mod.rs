//! Planar constructions over `kurbo` points.

pub(crate) mod curved_triangle;
pub(crate) mod intersect;
pub(crate) mod polygon;
pub(crate) mod spiral;
pub(crate) mod three_circles;
pub(crate) mod yin_yang;
