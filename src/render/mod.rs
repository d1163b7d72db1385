pub mod axes;
pub mod backend;
pub mod cpu;
pub mod surface;
