/// Rendered frame type.
pub mod backend;
/// `vello_cpu` raster surface.
pub mod cpu;
