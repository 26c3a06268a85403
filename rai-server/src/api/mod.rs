pub mod error;
pub mod extractors;
pub mod proxy;
pub mod tokens;
