//! Foundation layer: the structural data model and file input.

pub mod io;
pub mod models;
