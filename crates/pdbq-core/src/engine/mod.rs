//! Query layer: geometric queries and selection/mask export over a parsed
//! [`crate::core::models::molecule::Molecule`].

pub mod error;
pub mod geometry;
pub mod report;
pub mod session;
