//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Delete behavior (cascade for owned rows, restrict for referenced users)
//! is declared on the relations and enforced by the schema.

pub mod booking;
pub mod profile;
pub mod review;
pub mod service;
pub mod user;
