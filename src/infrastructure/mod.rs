//! Infrastructure layer: concrete implementations of the domain ports.

pub mod locale_parser;
