use crate::core::chem::elements::normalize_symbol;
use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No ATOM/HETATM records found in input")]
    EmptyStructure,
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Record is truncated (ATOM/HETATM records must reach column 54)")]
    TruncatedRecord,
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Cannot determine element for atom '{name}' (columns 77-78 empty)")]
    MissingElement { name: String },
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

// Columns 77-78 are optional in practice; older files leave them blank and
// encode the element as the first alphabetic character of the atom name.
fn element_from_name(name: &str) -> Option<String> {
    name.chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_string())
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Atom>, Self::Error> {
        let mut atoms = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 54 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::TruncatedRecord,
                        });
                    }

                    let serial_str = slice_and_trim(&line, 6, 11);
                    let name_str = slice_and_trim(&line, 12, 16);
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id = slice_and_trim(&line, 21, 22).chars().next();
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let x_str = slice_and_trim(&line, 30, 38);
                    let y_str = slice_and_trim(&line, 38, 46);
                    let z_str = slice_and_trim(&line, 46, 54);
                    let element_str = slice_and_trim(&line, 76, 78);

                    let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "7-11".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    let res_seq: isize = if res_seq_str.is_empty() {
                        0
                    } else {
                        res_seq_str.parse().map_err(|_| PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::InvalidInt {
                                columns: "23-26".into(),
                                value: res_seq_str.into(),
                            },
                        })?
                    };
                    let x: f64 = x_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidFloat {
                            columns: "31-38".into(),
                            value: x_str.into(),
                        },
                    })?;
                    let y: f64 = y_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidFloat {
                            columns: "39-46".into(),
                            value: y_str.into(),
                        },
                    })?;
                    let z: f64 = z_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidFloat {
                            columns: "47-54".into(),
                            value: z_str.into(),
                        },
                    })?;

                    let raw_element = if element_str.is_empty() {
                        element_from_name(name_str).ok_or_else(|| PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingElement {
                                name: name_str.into(),
                            },
                        })?
                    } else {
                        element_str.to_string()
                    };

                    atoms.push(Atom {
                        serial,
                        name: name_str.to_string(),
                        element: normalize_symbol(&raw_element),
                        residue_name: res_name_str.to_string(),
                        chain_id,
                        residue_seq: res_seq,
                        position: Point3::new(x, y, z),
                    });
                }
                // Single-structure extraction: the first model is the structure.
                "END" | "ENDMDL" => break,
                _ => continue,
            }
        }

        if atoms.is_empty() {
            return Err(PdbError::EmptyStructure);
        }
        Ok(atoms)
    }
}
