//! # pdbq Core Library
//!
//! A library for parsing fixed-column PDB structure files into an in-memory
//! structural model and running geometric and selection queries over it.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Contains the structural data model
//!   (`Molecule` and its atoms, residues, chains, and bonds) and the
//!   fixed-column PDB reader that assembles it in a single pass.
//!
//! - **[`engine`]: The Query Layer.** A [`engine::session::QuerySession`]
//!   borrows a parsed `Molecule` and provides pairwise distances,
//!   radius-based neighbor searches, the full distance matrix, and
//!   selection sets that can be exported as index masks for external
//!   simulation tooling.

pub mod core;
pub mod engine;
