//! # Adapters
//!
//! Concrete implementations of the port traits against real services
//! and the terminal.

pub mod console;
pub mod ip_locate;
pub mod nominatim;
pub mod overpass;
