use crate::core::models::atom::Atom;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading atomic records from a structure file format.
///
/// Implementors handle format-specific parsing and yield the file's atoms as an
/// ordered sequence matching source record order. Reading is the only
/// responsibility here; graph artifacts are written by the pipeline driver,
/// not through this trait.
pub trait StructureFile {
    /// The error type for parse operations.
    type Error: Error + From<io::Error>;

    /// Reads an ordered atom sequence from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed atoms in source record order.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed, truncated, contains no atom
    /// records, or an I/O operation fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Atom>, Self::Error>;

    /// Reads an ordered atom sequence from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Atom>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
