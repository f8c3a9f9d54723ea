/// A named group of atoms sharing one residue sequence number.
///
/// Residue ids are treated as a flat keyspace scoped to the file: the model
/// does not qualify them by chain. A residue is created lazily the first
/// time an atom referencing a new id is seen; later atoms with the same id
/// are appended to its member list in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Residue sequence number from the source file.
    pub id: isize,
    /// Name of the residue, trimmed and upper-cased (e.g., "ALA", "HOH").
    pub name: String,
    /// Serials of member atoms, in file order.
    pub(crate) atoms: Vec<usize>,
}

impl Residue {
    pub(crate) fn new(id: isize, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, serial: usize) {
        self.atoms.push(serial);
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_residue_has_fresh_empty_member_list() {
        let a = Residue::new(10, "GLY");
        let b = Residue::new(10, "GLY");
        assert!(a.atoms().is_empty());
        assert!(b.atoms().is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn add_atom_appends_in_order() {
        let mut residue = Residue::new(5, "ALA");
        residue.add_atom(3);
        residue.add_atom(1);
        residue.add_atom(2);
        assert_eq!(residue.atoms(), &[3, 1, 2]);
    }
}
