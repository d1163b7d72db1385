pub mod interp;
pub mod style;
pub mod textured;
