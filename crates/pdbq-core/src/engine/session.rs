use super::error::EngineError;
use crate::core::models::molecule::Molecule;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which ids a mask is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// Atom serials from the current selection.
    Atoms,
    /// Residue ids the selected atoms belong to.
    Residues,
}

#[derive(Debug, Error)]
#[error("Invalid mask kind (expected 'atoms' or 'residues')")]
pub struct ParseMaskKindError;

impl FromStr for MaskKind {
    type Err = ParseMaskKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atoms" => Ok(MaskKind::Atoms),
            "residues" => Ok(MaskKind::Residues),
            _ => Err(ParseMaskKindError),
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MaskKind::Atoms => "atoms",
            MaskKind::Residues => "residues",
        })
    }
}

/// A query session over one molecule.
///
/// The session holds the caller-side state the molecule itself never owns:
/// the current selection (a de-duplicated, insertion-ordered list of atom
/// serials) and the cached reduced (heavy-atom) view. It assumes
/// exclusive, non-concurrent access to the molecule; all operations are
/// synchronous and CPU-bound.
pub struct QuerySession<'a> {
    molecule: &'a Molecule,
    selected: Vec<usize>,
    reduced: Option<Vec<usize>>,
}

impl<'a> QuerySession<'a> {
    pub fn new(molecule: &'a Molecule) -> Self {
        Self {
            molecule,
            selected: Vec::new(),
            reduced: None,
        }
    }

    pub fn molecule(&self) -> &'a Molecule {
        self.molecule
    }

    /// The current selection, in insertion order.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub(crate) fn replace_selection(&mut self, serials: Vec<usize>) {
        self.selected = serials;
    }

    /// Adds an atom to the selection. Idempotent: selecting an already
    /// selected serial is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AtomNotFound` if the serial is absent.
    pub fn select(&mut self, serial: usize) -> Result<(), EngineError> {
        if !self.molecule.contains_atom(serial) {
            return Err(EngineError::AtomNotFound { serial });
        }
        if !self.selected.contains(&serial) {
            self.selected.push(serial);
        }
        Ok(())
    }

    /// Adds each serial in the given order, skipping ones already
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AtomNotFound` on the first absent serial;
    /// serials before it stay selected.
    pub fn select_many(&mut self, serials: &[usize]) -> Result<(), EngineError> {
        for &serial in serials {
            self.select(serial)?;
        }
        Ok(())
    }

    /// Returns the cached subset of all molecule atoms whose element is
    /// not a hydrogen isotope. A pure derived view, independent of the
    /// current selection; computed once per session.
    pub fn reduce(&mut self) -> &[usize] {
        let molecule = self.molecule;
        self.reduced.get_or_insert_with(|| {
            molecule
                .atoms_iter()
                .filter(|(_, atom)| !atom.is_hydrogen())
                .map(|(serial, _)| serial)
                .collect()
        })
    }

    /// Maps atom serials to the de-duplicated list of residue ids they
    /// belong to, preserving first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AtomNotFound` if any serial is absent.
    pub fn residues_of(&self, serials: &[usize]) -> Result<Vec<isize>, EngineError> {
        let mut residues = Vec::new();
        for &serial in serials {
            let atom = self
                .molecule
                .atom(serial)
                .ok_or(EngineError::AtomNotFound { serial })?;
            if !residues.contains(&atom.residue_id) {
                residues.push(atom.residue_id);
            }
        }
        Ok(residues)
    }

    /// Renders the current selection as a comma-separated index mask: no
    /// trailing comma, no surrounding whitespace or brackets. Used to hand
    /// selections to external simulation tooling.
    pub fn to_mask(&self, kind: MaskKind) -> Result<String, EngineError> {
        let mask = match kind {
            MaskKind::Atoms => join_ids(self.selected.iter()),
            MaskKind::Residues => join_ids(self.residues_of(&self.selected)?.iter()),
        };
        Ok(mask)
    }
}

fn join_ids<T: fmt::Display>(ids: impl Iterator<Item = T>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::ParseOptions;
    use crate::core::io::pdb::PdbFile;
    use crate::core::io::traits::StructureFile;

    fn atom_line(serial: usize, element: &str, res_name: &str, res_id: isize) -> String {
        format!(
            "ATOM  {serial:>5} {element:>2}   {res_name:<4}A{res_id:>5}      0.000   0.000   0.000"
        )
    }

    fn fixture() -> Molecule {
        // Serials 7, 12, 30 across two residues; serial 12 is a hydrogen.
        let content = format!(
            "{}\n{}\n{}\n",
            atom_line(7, "N", "GLY", 1),
            atom_line(12, "H", "GLY", 1),
            atom_line(30, "C", "ALA", 2),
        );
        let (molecule, _) =
            PdbFile::read_str("fixture", &content, &ParseOptions::default()).unwrap();
        molecule
    }

    #[test]
    fn select_is_idempotent() {
        let molecule = fixture();
        let mut session = QuerySession::new(&molecule);
        session.select(7).unwrap();
        session.select(7).unwrap();
        assert_eq!(session.selected(), &[7]);
    }

    #[test]
    fn select_unknown_serial_fails() {
        let molecule = fixture();
        let mut session = QuerySession::new(&molecule);
        assert_eq!(
            session.select(99).unwrap_err(),
            EngineError::AtomNotFound { serial: 99 }
        );
        assert!(session.selected().is_empty());
    }

    #[test]
    fn select_many_keeps_order_and_skips_duplicates() {
        let molecule = fixture();
        let mut session = QuerySession::new(&molecule);
        session.select_many(&[12, 7, 7, 30]).unwrap();
        assert_eq!(session.selected(), &[12, 7, 30]);
    }

    #[test]
    fn reduce_excludes_hydrogen_isotopes_and_is_cached() {
        let molecule = fixture();
        let mut session = QuerySession::new(&molecule);
        assert_eq!(session.reduce(), &[7, 30]);
        // A second call must not re-append.
        assert_eq!(session.reduce(), &[7, 30]);
    }

    #[test]
    fn reduce_is_independent_of_selection() {
        let molecule = fixture();
        let mut session = QuerySession::new(&molecule);
        session.select(12).unwrap();
        assert_eq!(session.reduce(), &[7, 30]);
        assert_eq!(session.selected(), &[12]);
    }

    #[test]
    fn residues_of_deduplicates_in_first_seen_order() {
        let molecule = fixture();
        let session = QuerySession::new(&molecule);
        assert_eq!(session.residues_of(&[30, 7, 12]).unwrap(), vec![2, 1]);
    }

    #[test]
    fn residues_of_unknown_serial_fails() {
        let molecule = fixture();
        let session = QuerySession::new(&molecule);
        assert_eq!(
            session.residues_of(&[7, 99]).unwrap_err(),
            EngineError::AtomNotFound { serial: 99 }
        );
    }

    #[test]
    fn atom_mask_renders_insertion_order_without_trailing_comma() {
        let molecule = fixture();
        let mut session = QuerySession::new(&molecule);
        session.select_many(&[12, 7, 7, 30]).unwrap();
        assert_eq!(session.to_mask(MaskKind::Atoms).unwrap(), "12,7,30");
    }

    #[test]
    fn empty_selection_renders_empty_mask() {
        let molecule = fixture();
        let session = QuerySession::new(&molecule);
        assert_eq!(session.to_mask(MaskKind::Atoms).unwrap(), "");
        assert_eq!(session.to_mask(MaskKind::Residues).unwrap(), "");
    }

    #[test]
    fn residue_mask_routes_through_residues_of() {
        let molecule = fixture();
        let mut session = QuerySession::new(&molecule);
        session.select_many(&[30, 7, 12]).unwrap();
        assert_eq!(session.to_mask(MaskKind::Residues).unwrap(), "2,1");
    }

    #[test]
    fn mask_kind_parses_and_displays() {
        assert_eq!("atoms".parse::<MaskKind>().unwrap(), MaskKind::Atoms);
        assert_eq!("Residues".parse::<MaskKind>().unwrap(), MaskKind::Residues);
        assert!("bonds".parse::<MaskKind>().is_err());
        assert_eq!(MaskKind::Atoms.to_string(), "atoms");
    }
}
