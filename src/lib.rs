pub mod aggregate;
pub mod charts;
pub mod config;
pub mod data;
pub mod fetch;
