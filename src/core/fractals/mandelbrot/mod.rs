pub mod algorithm;
pub mod colour_map;
pub mod params;
pub mod pixel_pipeline;
