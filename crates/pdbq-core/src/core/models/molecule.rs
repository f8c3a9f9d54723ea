use super::atom::Atom;
use super::chain::Chain;
use super::residue::Residue;
use super::topology::Bond;
use std::collections::BTreeMap;

/// The aggregate root owning all atoms, bonds, residues, and chains parsed
/// from one structure file.
///
/// Atoms and residues are keyed by their file-scoped serial numbers, which
/// serve as the external handles for every query. Iteration over atoms is
/// in ascending-serial order; this is the atom-iteration order referenced
/// by the geometry contracts (deterministic, but not otherwise meaningful).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    /// Name derived from the source file name (path without extension,
    /// lower-cased).
    pub name: String,
    atoms: BTreeMap<usize, Atom>,
    bonds: Vec<Bond>,
    residues: BTreeMap<isize, Residue>,
    chains: Vec<Chain>,
}

impl Molecule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Retrieves an atom by its serial number.
    pub fn atom(&self, serial: usize) -> Option<&Atom> {
        self.atoms.get(&serial)
    }

    pub fn contains_atom(&self, serial: usize) -> bool {
        self.atoms.contains_key(&serial)
    }

    /// Returns an iterator over all atoms in ascending-serial order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (usize, &Atom)> {
        self.atoms.iter().map(|(&serial, atom)| (serial, atom))
    }

    /// Retrieves a residue by its sequence number.
    pub fn residue(&self, id: isize) -> Option<&Residue> {
        self.residues.get(&id)
    }

    pub fn residues_iter(&self) -> impl Iterator<Item = (isize, &Residue)> {
        self.residues.iter().map(|(&id, residue)| (id, residue))
    }

    /// Returns a slice of all bonds in file order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Returns a slice of all chains in the order they were closed.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn atom_total(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue_total(&self) -> usize {
        self.residues.len()
    }

    pub fn bond_total(&self) -> usize {
        self.bonds.len()
    }

    pub fn chain_total(&self) -> usize {
        self.chains.len()
    }

    /// Inserts an atom at its serial, overwriting any previous atom with
    /// the same serial.
    pub(crate) fn insert_atom(&mut self, atom: Atom) {
        self.atoms.insert(atom.serial, atom);
    }

    pub(crate) fn insert_residue(&mut self, residue: Residue) {
        self.residues.insert(residue.id, residue);
    }

    pub(crate) fn residue_mut(&mut self, id: isize) -> Option<&mut Residue> {
        self.residues.get_mut(&id)
    }

    pub(crate) fn push_bond(&mut self, bond: Bond) {
        self.bonds.push(bond);
    }

    pub(crate) fn push_chain(&mut self, chain: Chain) {
        self.chains.push(chain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn test_molecule() -> Molecule {
        let mut m = Molecule::new("test");
        m.insert_atom(Atom::new(30, "C", Point3::origin(), 2, "ALA"));
        m.insert_atom(Atom::new(7, "N", Point3::origin(), 1, "GLY"));
        m.insert_atom(Atom::new(12, "O", Point3::origin(), 1, "GLY"));
        m
    }

    #[test]
    fn counts_are_derived_from_collections() {
        let mut m = test_molecule();
        assert_eq!(m.atom_total(), 3);
        assert_eq!(m.residue_total(), 0);
        assert_eq!(m.bond_total(), 0);
        assert_eq!(m.chain_total(), 0);

        m.push_bond(Bond::new(7, 12));
        m.insert_residue(Residue::new(1, "GLY"));
        m.push_chain(Chain::new(1, 'A', vec![1]));
        assert_eq!(m.bond_total(), 1);
        assert_eq!(m.residue_total(), 1);
        assert_eq!(m.chain_total(), 1);
    }

    #[test]
    fn atoms_iterate_in_ascending_serial_order() {
        let m = test_molecule();
        let serials: Vec<usize> = m.atoms_iter().map(|(serial, _)| serial).collect();
        assert_eq!(serials, vec![7, 12, 30]);
    }

    #[test]
    fn insert_atom_overwrites_same_serial() {
        let mut m = test_molecule();
        m.insert_atom(Atom::new(7, "S", Point3::new(1.0, 0.0, 0.0), 1, "GLY"));
        assert_eq!(m.atom_total(), 3);
        assert_eq!(m.atom(7).unwrap().element, "S");
    }

    #[test]
    fn atom_lookup_by_serial() {
        let m = test_molecule();
        assert_eq!(m.atom(12).unwrap().element, "O");
        assert!(m.atom(99).is_none());
        assert!(m.contains_atom(30));
        assert!(!m.contains_atom(31));
    }

    #[test]
    fn duplicate_bonds_are_preserved() {
        let mut m = test_molecule();
        m.push_bond(Bond::new(7, 12));
        m.push_bond(Bond::new(7, 12));
        assert_eq!(m.bond_total(), 2);
        assert_eq!(m.bonds()[0], m.bonds()[1]);
    }
}
