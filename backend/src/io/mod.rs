//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Currently REST only.

pub mod rest;

pub use rest::*;
