//! Infrastructure layer - persistence implementations, loaders

pub mod fleet_loader;
pub mod persistence;

pub use fleet_loader::FleetLoader;
