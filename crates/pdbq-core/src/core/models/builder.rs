use super::atom::Atom;
use super::chain::Chain;
use super::molecule::Molecule;
use super::residue::Residue;
use super::topology::Bond;

/// Assembles a [`Molecule`] incrementally from decoded records, resolving
/// atom, residue, and chain membership in a single pass over the file.
///
/// Residues seen since the last chain terminator are staged in an
/// accumulator; a terminator closes them into a chain numbered sequentially
/// from 1. The chain name is the chain-identifier character captured from
/// whichever atom record most recently introduced a new residue, and it
/// persists across terminators until another new residue replaces it.
pub struct MoleculeBuilder {
    molecule: Molecule,

    // --- Builder-specific state for chain staging ---
    staged_residues: Vec<isize>,
    chain_name: Option<char>,
    next_chain_id: usize,
}

impl MoleculeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            molecule: Molecule::new(name),
            staged_residues: Vec::new(),
            chain_name: None,
            next_chain_id: 1,
        }
    }

    /// Inserts an atom (overwriting any previous atom at the same serial)
    /// and resolves its residue membership. A new residue id creates a
    /// residue, stages it for the current chain, and captures the line's
    /// chain-identifier character; an existing id gets the serial appended.
    pub fn add_atom(&mut self, atom: Atom, chain_id: char) -> &mut Self {
        if let Some(residue) = self.molecule.residue_mut(atom.residue_id) {
            residue.add_atom(atom.serial);
        } else {
            let mut residue = Residue::new(atom.residue_id, &atom.residue_name);
            residue.add_atom(atom.serial);
            self.staged_residues.push(residue.id);
            self.molecule.insert_residue(residue);
            self.chain_name = Some(chain_id);
        }
        self.molecule.insert_atom(atom);
        self
    }

    /// Appends bonds in file order. Endpoints are not validated here;
    /// dangling serials surface later when a query dereferences them.
    pub fn add_bonds(&mut self, bonds: impl IntoIterator<Item = Bond>) -> &mut Self {
        for bond in bonds {
            self.molecule.push_bond(bond);
        }
        self
    }

    /// Closes the current chain: the staged residues become a chain with
    /// the next sequential id and the captured name, and staging resets.
    pub fn close_chain(&mut self) -> &mut Self {
        let residues = std::mem::take(&mut self.staged_residues);
        let chain = Chain::new(self.next_chain_id, self.chain_name.unwrap_or(' '), residues);
        self.molecule.push_chain(chain);
        self.next_chain_id += 1;
        self
    }

    pub fn build(self) -> Molecule {
        self.molecule
    }
}
