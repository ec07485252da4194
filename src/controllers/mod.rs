pub mod benchmark;
pub mod compare;
pub mod render;
