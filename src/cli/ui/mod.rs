pub mod colorizer;
pub mod screen;
