use nalgebra::Point3;

/// Element symbols that count as hydrogen for the purpose of reduced
/// (heavy-atom) views. Deuterium and tritium appear in neutron structures
/// and are treated as hydrogen isotopes.
static HYDROGEN_ISOTOPES: phf::Set<&'static str> = phf::phf_set! {
    "H",
    "D",
    "T",
};

/// Represents a single atom decoded from an `ATOM`/`HETATM` record.
///
/// The serial number comes straight from the source file and is the sole
/// external handle used by all geometry and selection operations. Serials
/// are unique within a file but not necessarily contiguous. The residue
/// name is a denormalized copy of the parent residue's name, kept here for
/// convenience.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom serial number from the source file.
    pub serial: usize,
    /// Element symbol, trimmed and upper-cased (e.g., "C", "N", "FE").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Sequence number of the residue this atom belongs to.
    pub residue_id: isize,
    /// Name of the residue this atom belongs to (e.g., "ALA").
    pub residue_name: String,
}

impl Atom {
    /// Creates a new `Atom` with the given identity and coordinates.
    pub fn new(
        serial: usize,
        element: &str,
        position: Point3<f64>,
        residue_id: isize,
        residue_name: &str,
    ) -> Self {
        Self {
            serial,
            element: element.to_string(),
            position,
            residue_id,
            residue_name: residue_name.to_string(),
        }
    }

    /// Returns `true` if this atom's element is hydrogen or one of its
    /// isotopes. Used by reduced (heavy-atom) selections.
    pub fn is_hydrogen(&self) -> bool {
        HYDROGEN_ISOTOPES.contains(self.element.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_initializes_fields_correctly() {
        let atom = Atom::new(7, "N", Point3::new(1.0, 2.0, 3.0), 12, "MET");
        assert_eq!(atom.serial, 7);
        assert_eq!(atom.element, "N");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.residue_id, 12);
        assert_eq!(atom.residue_name, "MET");
    }

    #[test]
    fn is_hydrogen_covers_isotopes() {
        let h = Atom::new(1, "H", Point3::origin(), 1, "GLY");
        let d = Atom::new(2, "D", Point3::origin(), 1, "GLY");
        let t = Atom::new(3, "T", Point3::origin(), 1, "GLY");
        assert!(h.is_hydrogen());
        assert!(d.is_hydrogen());
        assert!(t.is_hydrogen());
    }

    #[test]
    fn is_hydrogen_rejects_heavy_elements() {
        let c = Atom::new(1, "C", Point3::origin(), 1, "ALA");
        let he = Atom::new(2, "HE", Point3::origin(), 1, "ALA");
        assert!(!c.is_hydrogen());
        // Helium contains an 'H' but is not a hydrogen isotope.
        assert!(!he.is_hydrogen());
    }
}
