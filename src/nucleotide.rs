use crate::error::{Error, Result};

pub const VALID_NUCLEOTIDES: [char; 4] = ['A', 'T', 'G', 'C'];

/// Check a single base. `position` is 1-based and only used for the error.
pub fn validate_nucleotide(base: char, position: usize) -> Result<char> {
    if VALID_NUCLEOTIDES.contains(&base) {
        Ok(base)
    } else {
        Err(Error::Nucleotide {
            found: base,
            position,
        })
    }
}

/// Accept a replacement only if every base is one of A, T, G, C.
/// Expects input already uppercased; lowercase bases are rejected here.
pub fn validate_replacement(text: &str) -> Result<String> {
    for (i, base) in text.chars().enumerate() {
        validate_nucleotide(base, i + 1)?;
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_bases() {
        for b in ['A', 'T', 'G', 'C'] {
            assert_eq!(validate_nucleotide(b, 1).unwrap(), b);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for b in ['U', '*', 'N', 'a', ' ', 'Q'] {
            assert!(validate_nucleotide(b, 1).is_err(), "{:?}", b);
        }
    }

    #[test]
    fn replacement_reports_first_bad_base() {
        match validate_replacement("ATXGZ") {
            Err(Error::Nucleotide { found, position }) => {
                assert_eq!(found, 'X');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn replacement_returned_unchanged() {
        assert_eq!(validate_replacement("ATGTAA").unwrap(), "ATGTAA");
    }
}
