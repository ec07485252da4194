pub mod backend;
pub mod buffer_descriptor;
pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod pixel_rect;
pub mod point;
pub mod render_request;
pub mod view_state;
