//! HTTP access to the portal API

pub mod client;
mod error;
pub mod gateway;

pub use error::ApiError;
pub use gateway::{EntityGateway, HttpGateway, OwnProfileGateway};
