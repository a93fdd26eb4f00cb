//! Domain services

pub mod fare_policy;

pub use fare_policy::{linear_fare, FarePolicy, FareRates};
