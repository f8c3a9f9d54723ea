use super::error::EngineError;
use super::session::QuerySession;

/// Truncates toward zero at hundredths resolution. Distances are reported
/// truncated, not rounded: 2.999 becomes 2.99.
fn truncate_hundredths(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

impl<'a> QuerySession<'a> {
    /// Euclidean distance between two atoms, truncated to two decimals.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AtomNotFound` if either serial is absent.
    pub fn distance(&self, serial1: usize, serial2: usize) -> Result<f64, EngineError> {
        let atom1 = self
            .molecule()
            .atom(serial1)
            .ok_or(EngineError::AtomNotFound { serial: serial1 })?;
        let atom2 = self
            .molecule()
            .atom(serial2)
            .ok_or(EngineError::AtomNotFound { serial: serial2 })?;
        Ok(truncate_hundredths((atom1.position - atom2.position).norm()))
    }

    /// Returns the atoms (excluding the query atom itself) whose distance
    /// to the query atom is at most `radius`, with the parallel list of
    /// distances, in the molecule's atom-iteration order.
    ///
    /// Side effect: the session's selection is replaced by the neighbor
    /// set. Callers needing a pure query must snapshot the selection
    /// themselves.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::AtomNotFound` if the query serial is absent.
    pub fn neighbors(
        &mut self,
        serial: usize,
        radius: f64,
    ) -> Result<(Vec<usize>, Vec<f64>), EngineError> {
        if !self.molecule().contains_atom(serial) {
            return Err(EngineError::AtomNotFound { serial });
        }

        let mut within = Vec::new();
        let mut distances = Vec::new();
        for (other, _) in self.molecule().atoms_iter() {
            if other == serial {
                continue;
            }
            let distance = self.distance(serial, other)?;
            if distance <= radius {
                within.push(other);
                distances.push(distance);
            }
        }

        self.replace_selection(within.clone());
        Ok((within, distances))
    }

    /// The full N x N distance matrix in the molecule's atom-iteration
    /// order: symmetric, zero diagonal. Inherently O(N^2) distance
    /// evaluations; long-running callers can observe per-row progress via
    /// [`QuerySession::distance_matrix_with_progress`].
    pub fn distance_matrix(&self) -> Vec<Vec<f64>> {
        self.distance_matrix_with_progress(|_| {})
    }

    /// Like [`QuerySession::distance_matrix`], invoking `on_row` with the
    /// row index after each completed row.
    pub fn distance_matrix_with_progress<F>(&self, mut on_row: F) -> Vec<Vec<f64>>
    where
        F: FnMut(usize),
    {
        let atoms: Vec<_> = self.molecule().atoms_iter().map(|(_, atom)| atom).collect();
        atoms
            .iter()
            .enumerate()
            .map(|(row, atom1)| {
                let distances = atoms
                    .iter()
                    .map(|atom2| truncate_hundredths((atom1.position - atom2.position).norm()))
                    .collect();
                on_row(row);
                distances
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::ParseOptions;
    use crate::core::io::pdb::PdbFile;
    use crate::core::io::traits::StructureFile;
    use crate::core::models::molecule::Molecule;

    fn atom_line(serial: usize, res_id: isize, coords: (f64, f64, f64)) -> String {
        format!(
            "ATOM  {serial:>5}  C   ALA A{res_id:>5}    {x:>7.3}{y:>8.3}{z:>8.3}",
            x = coords.0,
            y = coords.1,
            z = coords.2,
        )
    }

    fn molecule_with(coords: &[(f64, f64, f64)]) -> Molecule {
        let content: String = coords
            .iter()
            .enumerate()
            .map(|(index, &c)| atom_line(index + 1, (index + 1) as isize, c) + "\n")
            .collect();
        let (molecule, _) =
            PdbFile::read_str("geom", &content, &ParseOptions::default()).unwrap();
        molecule
    }

    #[test]
    fn distance_of_3_4_5_triangle_is_exact() {
        let molecule = molecule_with(&[(0.0, 0.0, 0.0), (3.0, 4.0, 0.0)]);
        let session = QuerySession::new(&molecule);
        assert_eq!(session.distance(1, 2).unwrap(), 5.00);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_diagonal() {
        let molecule = molecule_with(&[(0.1, 2.5, -1.0), (-3.0, 0.25, 4.0)]);
        let session = QuerySession::new(&molecule);
        assert_eq!(
            session.distance(1, 2).unwrap(),
            session.distance(2, 1).unwrap()
        );
        assert_eq!(session.distance(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn distance_truncates_toward_zero_instead_of_rounding() {
        // |(0,0,2.999)| = 2.999 -> 2.99, not 3.00.
        let molecule = molecule_with(&[(0.0, 0.0, 0.0), (0.0, 0.0, 2.999)]);
        let session = QuerySession::new(&molecule);
        assert_eq!(session.distance(1, 2).unwrap(), 2.99);

        // sqrt(2) = 1.4142... -> 1.41.
        let molecule = molecule_with(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0)]);
        let session = QuerySession::new(&molecule);
        assert_eq!(session.distance(1, 2).unwrap(), 1.41);
    }

    #[test]
    fn distance_to_missing_atom_fails() {
        let molecule = molecule_with(&[(0.0, 0.0, 0.0)]);
        let session = QuerySession::new(&molecule);
        assert_eq!(
            session.distance(1, 9).unwrap_err(),
            EngineError::AtomNotFound { serial: 9 }
        );
        assert_eq!(
            session.distance(9, 1).unwrap_err(),
            EngineError::AtomNotFound { serial: 9 }
        );
    }

    #[test]
    fn neighbors_excludes_query_atom_and_respects_radius() {
        let molecule = molecule_with(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (0.0, 2.0, 0.0),
            (10.0, 0.0, 0.0),
        ]);
        let mut session = QuerySession::new(&molecule);
        let (atoms, distances) = session.neighbors(1, 2.5).unwrap();
        assert_eq!(atoms, vec![2, 3]);
        assert_eq!(distances, vec![1.0, 2.0]);
        assert!(!atoms.contains(&1));
    }

    #[test]
    fn growing_radius_yields_superset() {
        let molecule = molecule_with(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (0.0, 3.0, 0.0),
            (0.0, 0.0, 6.0),
        ]);
        let mut session = QuerySession::new(&molecule);
        let (small, _) = session.neighbors(1, 2.0).unwrap();
        let (large, _) = session.neighbors(1, 7.0).unwrap();
        assert!(small.iter().all(|serial| large.contains(serial)));
        assert!(large.len() > small.len());
    }

    #[test]
    fn neighbors_replaces_the_selection() {
        let molecule = molecule_with(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (9.0, 0.0, 0.0)]);
        let mut session = QuerySession::new(&molecule);
        session.select(3).unwrap();
        let (atoms, _) = session.neighbors(1, 2.0).unwrap();
        assert_eq!(atoms, vec![2]);
        assert_eq!(session.selected(), &[2]);
    }

    #[test]
    fn neighbors_of_missing_atom_fails() {
        let molecule = molecule_with(&[(0.0, 0.0, 0.0)]);
        let mut session = QuerySession::new(&molecule);
        assert_eq!(
            session.neighbors(5, 1.0).unwrap_err(),
            EngineError::AtomNotFound { serial: 5 }
        );
    }

    #[test]
    fn distance_matrix_is_symmetric_with_zero_diagonal() {
        let molecule = molecule_with(&[(0.0, 0.0, 0.0), (3.0, 4.0, 0.0), (1.0, 1.0, 1.0)]);
        let session = QuerySession::new(&molecule);
        let matrix = session.distance_matrix();
        assert_eq!(matrix.len(), 3);
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), 3);
            assert_eq!(row[i], 0.0);
            for (j, &value) in row.iter().enumerate() {
                assert_eq!(value, matrix[j][i]);
            }
        }
        assert_eq!(matrix[0][1], 5.00);
    }

    #[test]
    fn distance_matrix_reports_row_progress() {
        let molecule = molecule_with(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let session = QuerySession::new(&molecule);
        let mut rows = Vec::new();
        let matrix = session.distance_matrix_with_progress(|row| rows.push(row));
        assert_eq!(matrix.len(), 2);
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn single_atom_matrix_is_zero() {
        let molecule = molecule_with(&[(2.0, 2.0, 2.0)]);
        let session = QuerySession::new(&molecule);
        assert_eq!(session.distance_matrix(), vec![vec![0.0]]);
    }
}
