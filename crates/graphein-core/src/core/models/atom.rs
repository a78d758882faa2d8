use nalgebra::Point3;

/// Represents a single atom record parsed from a structure file.
///
/// An `Atom` is immutable once parsed. The parser yields atoms in file record
/// order, and an atom's position in that ordered sequence (not its serial
/// number, which some files renumber or repeat across chains) is the stable
/// identifier used for graph nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom serial number as written in the source record.
    pub serial: usize,
    /// The atom name (e.g., "CA", "OXT").
    pub name: String,
    /// The canonicalized element symbol (e.g., "C", "Fe").
    pub element: String,
    /// The name of the residue this atom belongs to (e.g., "ALA").
    pub residue_name: String,
    /// The chain identifier, if the record carried one.
    pub chain_id: Option<char>,
    /// The residue sequence number within its chain.
    pub residue_seq: isize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with the given element symbol and position.
    ///
    /// Metadata fields (name, residue, chain) default to empty values; the
    /// parser fills them in from the source record. This constructor is mainly
    /// useful for building small structures in tests and examples.
    pub fn new(serial: usize, element: &str, position: Point3<f64>) -> Self {
        Self {
            serial,
            name: String::new(),
            element: element.to_string(),
            residue_name: String::new(),
            chain_id: None,
            residue_seq: 0,
            position,
        }
    }
}
