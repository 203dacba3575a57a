pub(crate) mod grid;
pub(crate) mod life;
pub(crate) mod raster;
pub(crate) mod rule;
