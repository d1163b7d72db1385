pub mod demos;
pub mod file;
