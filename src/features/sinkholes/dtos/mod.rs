pub mod sinkhole_dto;

pub use sinkhole_dto::{CreateSinkholeDto, SinkholeResponseDto, UpdateSinkholeDto};
