// Application layer - use cases and the ports they depend on
pub mod error;
pub mod forecast_service;
pub mod forecast_source;
