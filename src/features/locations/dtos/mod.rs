mod location_dto;

pub use location_dto::{LocationResponseDto, NearbyLocationDto};
