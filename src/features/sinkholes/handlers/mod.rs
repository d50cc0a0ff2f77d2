pub mod sinkhole_handler;

pub use sinkhole_handler::*;
