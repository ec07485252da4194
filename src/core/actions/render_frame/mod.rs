pub mod dispatch_frame;
pub mod errors;
pub mod ports;
