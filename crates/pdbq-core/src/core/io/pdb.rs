use super::ParseOptions;
use super::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::builder::MoleculeBuilder;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::Bond;
use nalgebra::Point3;
use std::fmt;
use std::io;
use thiserror::Error;
use tracing::warn;

/// Substring that marks a chain termination. Matched anywhere in a line,
/// not only as a leading token.
const TERMINATOR_MARKER: &str = "TER";

/// Shortest line that still carries all fixed columns of an atom record
/// (the z coordinate ends at column 54).
const ATOM_RECORD_MIN_LEN: usize = 54;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for an ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

/// Non-fatal structural findings reported after a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file carried no `CONECT` records.
    MissingConnectivity,
    /// The file carried no terminator marker and no chains were built.
    MissingChainBoundaries,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Diagnostic::MissingConnectivity => {
                "no connectivity information, bond-dependent analyses unavailable"
            }
            Diagnostic::MissingChainBoundaries => {
                "no chain boundaries, chain analyses unavailable"
            }
        })
    }
}

/// Everything non-fatal the reader noticed: structural diagnostics and,
/// under the skip policy, the number of malformed lines dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub diagnostics: Vec<Diagnostic>,
    pub skipped_lines: usize,
}

/// The closed set of record kinds recognized by their fixed leading token.
///
/// Chain termination is deliberately not a kind: the terminator is a
/// substring test applied to every line by [`is_terminator`], so even an
/// atom line containing `TER` closes the current chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Atom,
    Hetatm,
    Conect,
    Other,
}

impl RecordKind {
    pub fn classify(line: &str) -> RecordKind {
        if line.get(0..4) == Some("ATOM") {
            RecordKind::Atom
        } else if line.get(0..6) == Some("HETATM") {
            RecordKind::Hetatm
        } else if line.get(0..6) == Some("CONECT") {
            RecordKind::Conect
        } else {
            RecordKind::Other
        }
    }
}

/// One decoded line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Atom(AtomRecord),
    Conect(Vec<Bond>),
    Other,
}

/// Fields decoded from the fixed columns of an `ATOM`/`HETATM` line.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub serial: usize,
    pub element: String,
    pub residue_id: isize,
    pub residue_name: String,
    pub chain_id: char,
    pub position: Point3<f64>,
}

impl From<AtomRecord> for Atom {
    fn from(record: AtomRecord) -> Self {
        Atom::new(
            record.serial,
            &record.element,
            record.position,
            record.residue_id,
            &record.residue_name,
        )
    }
}

impl Record {
    /// Classifies and decodes one line (no trailing newline).
    ///
    /// # Errors
    ///
    /// Returns `PdbError::Parse` if the line claims a recognized record
    /// kind but a required column range fails numeric decoding, or an atom
    /// line is shorter than its fixed columns require.
    pub fn decode(line: &str, line_num: usize) -> Result<Record, PdbError> {
        match RecordKind::classify(line) {
            RecordKind::Atom | RecordKind::Hetatm => {
                decode_atom(line, line_num).map(Record::Atom)
            }
            RecordKind::Conect => decode_conect(line, line_num).map(Record::Conect),
            RecordKind::Other => Ok(Record::Other),
        }
    }
}

/// Returns `true` if the line closes the current chain.
pub fn is_terminator(line: &str) -> bool {
    line.contains(TERMINATOR_MARKER)
}

fn field(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn decode_atom(line: &str, line_num: usize) -> Result<AtomRecord, PdbError> {
    if line.len() < ATOM_RECORD_MIN_LEN {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }

    let serial_str = field(line, 6, 11);
    let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "7-11".into(),
            value: serial_str.into(),
        },
    })?;
    let element = field(line, 12, 14).to_ascii_uppercase();
    let residue_name = field(line, 17, 21).to_ascii_uppercase();
    let chain_id = line
        .get(21..22)
        .and_then(|s| s.chars().next())
        .unwrap_or(' ');
    let residue_id_str = field(line, 22, 27);
    let residue_id: isize = residue_id_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "23-27".into(),
            value: residue_id_str.into(),
        },
    })?;

    let coord = |start: usize, end: usize, columns: &str| -> Result<f64, PdbError> {
        let value = field(line, start, end);
        value.parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidFloat {
                columns: columns.into(),
                value: value.into(),
            },
        })
    };
    let x = coord(31, 38, "32-38")?;
    let y = coord(39, 46, "40-46")?;
    let z = coord(47, 54, "48-54")?;

    Ok(AtomRecord {
        serial,
        element,
        residue_id,
        residue_name,
        chain_id,
        position: Point3::new(x, y, z),
    })
}

fn decode_conect(line: &str, line_num: usize) -> Result<Vec<Bond>, PdbError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return Ok(Vec::new());
    }

    let parse_serial = |index: usize| -> Result<usize, PdbError> {
        fields[index].parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidInt {
                columns: format!("field {}", index + 1),
                value: fields[index].into(),
            },
        })
    };

    let anchor = parse_serial(1)?;
    let mut bonds = Vec::with_capacity(fields.len() - 2);
    for index in 2..fields.len() {
        bonds.push(Bond::new(anchor, parse_serial(index)?));
    }
    Ok(bonds)
}

/// The fixed-column PDB structure file format.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Report = ParseReport;
    type Error = PdbError;

    fn read_str(
        name: &str,
        content: &str,
        options: &ParseOptions,
    ) -> Result<(Molecule, ParseReport), PdbError> {
        let content = content.replace("\r\n", "\n");
        let mut builder = MoleculeBuilder::new(name);
        let mut report = ParseReport::default();

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            match Record::decode(line, line_num) {
                Ok(Record::Atom(record)) => {
                    let chain_id = record.chain_id;
                    builder.add_atom(record.into(), chain_id);
                }
                Ok(Record::Conect(bonds)) => {
                    builder.add_bonds(bonds);
                }
                Ok(Record::Other) => {}
                Err(err) if options.skip_malformed => {
                    warn!("skipping malformed line {line_num}: {err}");
                    report.skipped_lines += 1;
                }
                Err(err) => return Err(err),
            }
            // The terminator check is independent of record classification.
            if is_terminator(line) {
                builder.close_chain();
            }
        }

        let molecule = builder.build();
        if molecule.bond_total() == 0 {
            report.diagnostics.push(Diagnostic::MissingConnectivity);
        }
        if !content.contains(TERMINATOR_MARKER) && molecule.chain_total() == 0 {
            report.diagnostics.push(Diagnostic::MissingChainBoundaries);
        }
        for diagnostic in &report.diagnostics {
            warn!("{diagnostic}");
        }

        Ok((molecule, report))
    }
}
