pub mod adapters;
pub mod configuration;
pub mod core;
pub mod observability;
