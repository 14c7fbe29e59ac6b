pub mod basis;
pub mod canvas;
pub mod instruction;
pub mod output;
pub mod palette;
pub mod ppm;
pub mod raster;
pub mod sprite;
