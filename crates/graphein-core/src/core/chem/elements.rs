use phf::{Map, phf_map};

/// Per-element feature values attached to graph nodes.
///
/// Radii are van der Waals radii in Angstroms, electronegativities are on the
/// Pauling scale. `electronegativity` is `None` for elements without a defined
/// Pauling value (the noble gases); every other field is always present.
/// Valence counts follow the outer-shell convention, so alkali metals carry 1
/// and alkaline earths carry 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementFeatures {
    pub vdw_radius: f64,
    pub atomic_number: u8,
    pub valence_electrons: u8,
    pub electronegativity: Option<f64>,
}

macro_rules! features {
    ($radius:expr, $number:expr, $valence:expr, $en:expr) => {
        ElementFeatures {
            vdw_radius: $radius,
            atomic_number: $number,
            valence_electrons: $valence,
            electronegativity: Some($en),
        }
    };
    ($radius:expr, $number:expr, $valence:expr) => {
        ElementFeatures {
            vdw_radius: $radius,
            atomic_number: $number,
            valence_electrons: $valence,
            electronegativity: None,
        }
    };
}

static ELEMENT_FEATURES: Map<&'static str, ElementFeatures> = phf_map! {
    "H"  => features!(1.20, 1, 1, 2.20),
    "He" => features!(1.40, 2, 2),
    "Li" => features!(1.82, 3, 1, 0.98),
    "Be" => features!(1.53, 4, 2, 1.57),
    "B"  => features!(1.92, 5, 3, 2.04),
    "C"  => features!(1.70, 6, 4, 2.55),
    "N"  => features!(1.55, 7, 5, 3.04),
    "O"  => features!(1.52, 8, 6, 3.44),
    "F"  => features!(1.47, 9, 7, 3.98),
    "Ne" => features!(1.54, 10, 8),
    "Na" => features!(2.27, 11, 1, 0.93),
    "Mg" => features!(1.73, 12, 2, 1.31),
    "Al" => features!(1.84, 13, 3, 1.61),
    "Si" => features!(2.10, 14, 4, 1.90),
    "P"  => features!(1.80, 15, 5, 2.19),
    "S"  => features!(1.80, 16, 6, 2.58),
    "Cl" => features!(1.75, 17, 7, 3.16),
    "Ar" => features!(1.88, 18, 8),
    "K"  => features!(2.75, 19, 1, 0.82),
    "Ca" => features!(2.31, 20, 2, 1.00),
    "Mn" => features!(2.05, 25, 2, 1.55),
    "Fe" => features!(2.04, 26, 2, 1.83),
    "Co" => features!(2.00, 27, 2, 1.88),
    "Ni" => features!(1.63, 28, 2, 1.91),
    "Cu" => features!(1.40, 29, 1, 1.90),
    "Zn" => features!(1.39, 30, 2, 1.65),
    "Se" => features!(1.90, 34, 6, 2.55),
    "Br" => features!(1.85, 35, 7, 2.96),
    "I"  => features!(1.98, 53, 7, 2.66),
};

/// Canonicalizes a raw element symbol: trims whitespace, uppercases the first
/// character, and lowercases the rest (`" fe "` becomes `"Fe"`).
pub fn normalize_symbol(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => {
            let mut symbol = String::with_capacity(trimmed.len());
            symbol.extend(first.to_uppercase());
            symbol.extend(chars.flat_map(|c| c.to_lowercase()));
            symbol
        }
        None => String::new(),
    }
}

/// Looks up the feature values for an element symbol.
///
/// Symbols are matched case-insensitively after whitespace trimming. Returns
/// `None` for symbols absent from the built-in table; the graph builder
/// decides whether that aborts the file or yields null features.
pub fn lookup(symbol: &str) -> Option<&'static ElementFeatures> {
    ELEMENT_FEATURES.get(normalize_symbol(symbol).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_table_values_for_known_elements() {
        let carbon = lookup("C").unwrap();
        assert_eq!(carbon.vdw_radius, 1.70);
        assert_eq!(carbon.atomic_number, 6);
        assert_eq!(carbon.valence_electrons, 4);
        assert_eq!(carbon.electronegativity, Some(2.55));

        let oxygen = lookup("O").unwrap();
        assert_eq!(oxygen.vdw_radius, 1.52);
        assert_eq!(oxygen.atomic_number, 8);
        assert_eq!(oxygen.valence_electrons, 6);
        assert_eq!(oxygen.electronegativity, Some(3.44));
    }

    #[test]
    fn lookup_is_case_insensitive_and_trims_whitespace() {
        assert_eq!(lookup("c"), lookup("C"));
        assert_eq!(lookup(" FE "), lookup("Fe"));
        assert_eq!(lookup("cl"), lookup("Cl"));
        assert!(lookup("ZN").is_some());
    }

    #[test]
    fn lookup_returns_none_for_unknown_symbols() {
        assert!(lookup("Xx").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("CA2").is_none());
    }

    #[test]
    fn noble_gases_have_no_electronegativity() {
        assert_eq!(lookup("He").unwrap().electronegativity, None);
        assert_eq!(lookup("Ne").unwrap().electronegativity, None);
        assert_eq!(lookup("Ar").unwrap().electronegativity, None);
    }

    #[test]
    fn normalize_symbol_canonicalizes_case_and_whitespace() {
        assert_eq!(normalize_symbol("fe"), "Fe");
        assert_eq!(normalize_symbol("  BR "), "Br");
        assert_eq!(normalize_symbol("n"), "N");
        assert_eq!(normalize_symbol(""), "");
    }

    #[test]
    fn all_table_entries_have_positive_radius_and_number() {
        for (symbol, features) in ELEMENT_FEATURES.entries() {
            assert!(features.vdw_radius > 0.0, "bad radius for {}", symbol);
            assert!(features.atomic_number > 0, "bad number for {}", symbol);
        }
    }
}
