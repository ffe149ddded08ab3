//! Business logic services for the application layer.

pub mod in_flight;
pub mod shorten_service;

pub use in_flight::{InFlightGuard, InFlightRegistry};
pub use shorten_service::ShortenService;
