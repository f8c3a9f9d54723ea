use super::ParseOptions;
use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::io;
use std::path::Path;

/// Defines the interface for reading structure file formats.
///
/// Implementors decode the whole file content in one pass and produce a
/// [`Molecule`] plus a format-specific report of non-fatal findings.
pub trait StructureFile {
    /// Non-fatal findings collected while reading (diagnostics, skip
    /// counts).
    type Report;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a molecule from the full file content.
    ///
    /// # Arguments
    ///
    /// * `name` - The molecule name, normally derived from the file name.
    /// * `content` - The complete file content.
    /// * `options` - Reader policy knobs.
    ///
    /// # Errors
    ///
    /// Returns an error if a recognized record fails decoding and the
    /// options demand an abort.
    fn read_str(
        name: &str,
        content: &str,
        options: &ParseOptions,
    ) -> Result<(Molecule, Self::Report), Self::Error>;

    /// Reads a molecule from a file path.
    ///
    /// The file is read whole in one blocking call under scoped
    /// acquisition; the handle is released before parsing starts. The
    /// molecule name is the path without its extension, lower-cased.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &ParseOptions,
    ) -> Result<(Molecule, Self::Report), Self::Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let name = path.with_extension("").to_string_lossy().to_lowercase();
        Self::read_str(&name, &content, options)
    }
}
