pub mod config;
pub mod connector;
pub mod errors;

pub(crate) mod collections;
pub(crate) mod constants;
