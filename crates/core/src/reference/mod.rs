//! Reference data (topics, categories)

pub mod ports;
pub mod service;

pub use service::ReferenceDataProvider;
