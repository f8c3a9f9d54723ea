use crate::core::models::molecule::Molecule;
use std::io::Write;

/// Renders the structure summary as the literal JSON-shaped text consumed
/// by downstream tooling: keys `atom_total`, `residue_total`, `bond_total`
/// in that order, tab-space indented. The exact byte layout is part of the
/// export contract, so it is formatted by hand rather than serialized.
pub fn summary(molecule: &Molecule) -> String {
    format!(
        "{{ \n\t \"atom_total\": {},\n\t \"residue_total\": {},\n\t \"bond_total\": {}\n}}",
        molecule.atom_total(),
        molecule.residue_total(),
        molecule.bond_total(),
    )
}

/// Writes a distance matrix as headerless CSV, one row per line, values
/// with two decimals (the matrix is already truncated to hundredths).
pub fn write_matrix_csv<W: Write>(writer: W, matrix: &[Vec<f64>]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for row in matrix {
        csv_writer.write_record(row.iter().map(|value| format!("{value:.2}")))?;
    }
    csv_writer.flush()?;
    Ok(())
}
