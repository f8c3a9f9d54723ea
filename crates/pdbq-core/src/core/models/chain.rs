/// An ordered run of residues between chain-termination markers.
///
/// Chains are numbered 1, 2, 3, ... in the order their terminator lines
/// appear in the file; the name is the single chain-identifier character
/// captured from the record that introduced the chain's first new residue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Sequential chain number, starting at 1.
    pub id: usize,
    /// Chain identifier character from the source file (e.g., 'A').
    pub name: char,
    /// Ids of the residues accumulated since the previous terminator.
    pub(crate) residues: Vec<isize>,
}

impl Chain {
    pub(crate) fn new(id: usize, name: char, residues: Vec<isize>) -> Self {
        Self { id, name, residues }
    }

    pub fn residues(&self) -> &[isize] {
        &self.residues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chain_keeps_residue_order() {
        let chain = Chain::new(1, 'A', vec![10, 11]);
        assert_eq!(chain.id, 1);
        assert_eq!(chain.name, 'A');
        assert_eq!(chain.residues(), &[10, 11]);
    }
}
