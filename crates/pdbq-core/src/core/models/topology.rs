/// An unordered pair of atom serials connected by a bond.
///
/// PDB connectivity records carry no bond-order or type information, so
/// none is stored. Duplicate bonds between the same pair of atoms are
/// permitted and preserved in file order; the model never deduplicates
/// them. A bond may reference a serial that never appeared as an atom
/// record (hydrogens stripped from the file but still listed in `CONECT`
/// are common); such references only fail when a query dereferences them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Serial of the anchor atom.
    pub atom1: usize,
    /// Serial of the partner atom.
    pub atom2: usize,
}

impl Bond {
    pub fn new(atom1: usize, atom2: usize) -> Self {
        Self { atom1, atom2 }
    }

    pub fn contains(&self, serial: usize) -> bool {
        self.atom1 == serial || self.atom2 == serial
    }
}
