//! The structural data model: atoms, bonds, residues, chains, and the
//! owning [`molecule::Molecule`] aggregate, plus the incremental
//! [`builder::MoleculeBuilder`] used by the file reader.

pub mod atom;
pub mod builder;
pub mod chain;
pub mod molecule;
pub mod residue;
pub mod topology;
