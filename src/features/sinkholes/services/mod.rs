pub mod sinkhole_service;

pub use sinkhole_service::SinkholeService;
