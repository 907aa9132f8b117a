pub mod dto;
pub mod mapper;
pub mod model;
