//! # Storage Module
//!
//! Persistence for children, activities and feedback.
//!
//! Domain services only see the traits in [`traits`]; the SQLite
//! repositories behind them can be replaced without touching the domain.
//!
//! ## Layout
//!
//! - **connection**: pool ownership and schema setup
//! - **traits**: storage abstractions used by the services
//! - **repositories**: SQLite implementations of those traits
//!
//! ## Storage Rules
//!
//! - Activities are write-once; there is no update path
//! - Deleting a child removes its activities and their feedback
//! - Ratings outside 1..=5 are rejected by the schema as well as the service

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::*;
pub use traits::*;
