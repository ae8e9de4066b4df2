//! Core library for the `tiempo` CLI.
//!
//! This crate defines:
//! - The location directory and forecast domain model
//! - A day-partitioned cache for raw forecast documents
//! - The Tiempo XML parser and the cache-first acquisition pipeline
//! - Configuration & credentials handling
//!
//! It is used by `tiempo-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod location;
pub mod model;
pub mod provider;

pub use cache::DayCache;
pub use config::Config;
pub use error::{AcquisitionError, ParseError, TransportError};
pub use http::{HttpFetch, HttpResponse, ReqwestFetcher};
pub use location::{Location, SearchMode, search};
pub use model::{Forecast, ForecastDay, ForecastHour, WeatherCondition};
pub use provider::{ForecastProvider, ProviderId, provider_from_config};
