//! Shortening API client implementations.

pub mod http_shorten_api;

pub use http_shorten_api::HttpShortenApi;
