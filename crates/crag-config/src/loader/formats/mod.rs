//! Format-specific parsers producing a raw document

pub mod json;
pub mod toml;
pub mod yaml;
