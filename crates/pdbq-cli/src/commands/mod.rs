pub mod info;
pub mod map;
pub mod mask;
pub mod near;

use crate::error::Result;
use pdbq::core::io::ParseOptions;
use pdbq::core::io::pdb::{ParseReport, PdbFile};
use pdbq::core::io::traits::StructureFile;
use pdbq::core::models::molecule::Molecule;
use std::path::Path;
use tracing::{info, warn};

/// Loads a structure file, logging what was read. The core already warns
/// about structural diagnostics; this only summarizes the outcome.
pub(crate) fn load(path: &Path, options: &ParseOptions) -> Result<(Molecule, ParseReport)> {
    info!("Reading structure from {}", path.display());
    let (molecule, report) = PdbFile::read_from_path(path, options)?;
    info!(
        "Loaded '{}': {} atoms, {} residues, {} bonds, {} chains",
        molecule.name,
        molecule.atom_total(),
        molecule.residue_total(),
        molecule.bond_total(),
        molecule.chain_total(),
    );
    if report.skipped_lines > 0 {
        warn!("Skipped {} malformed lines", report.skipped_lines);
    }
    Ok((molecule, report))
}
