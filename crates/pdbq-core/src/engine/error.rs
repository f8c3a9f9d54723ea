use thiserror::Error;

/// Lookup failures raised by geometry and selection operations.
///
/// These are always surfaced to the caller and never silently defaulted;
/// a dangling bond reference parsed from the file only manifests here,
/// when a query dereferences the missing serial.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Atom {serial} not found in molecule")]
    AtomNotFound { serial: usize },

    #[error("Residue {id} not found in molecule")]
    ResidueNotFound { id: isize },
}
