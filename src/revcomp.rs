//! Strict reverse complement.
//!
//! Input is upper-cased and every base is validated against `ACGT` before any
//! output is produced, so a failure never leaves a half-transformed strand.
use bio::alphabets::dna;

use crate::error::Result;
use crate::sequence::{check_acgt, Sequence};

/// Reverse complement of `seq` (A↔T, C↔G, read 5'→3').
///
/// # Errors
/// [`crate::DesignError::InvalidBase`] for the first character outside `ACGT`.
///
/// # Examples
/// ```
/// assert_eq!(lampdesign::reverse_complement("atcg").unwrap().as_str(), "CGAT");
/// assert!(lampdesign::reverse_complement("ATCX").is_err());
/// ```
pub fn reverse_complement(seq: &str) -> Result<Sequence> {
    let upper = seq.to_ascii_uppercase();
    check_acgt(&upper)?;
    Ok(complement_validated(upper.as_bytes()))
}

impl Sequence {
    /// Infallible reverse complement of an already validated sequence.
    pub fn reverse_complement(&self) -> Sequence {
        complement_validated(self.as_bytes())
    }

    /// True when the sequence equals its own reverse complement.
    pub fn is_self_complementary(&self) -> bool {
        self.as_bytes().iter().eq(dna::revcomp(self.as_bytes()).iter())
    }
}

fn complement_validated(bytes: &[u8]) -> Sequence {
    let rc = dna::revcomp(bytes);
    // revcomp maps ACGT onto ACGT, so the bytes stay ASCII.
    Sequence::from_validated(String::from_utf8_lossy(&rc).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesignError;
    use rstest::rstest;

    #[rstest]
    #[case("ATCG", "CGAT")]
    #[case("aaccgt", "ACGGTT")]
    #[case("", "")]
    #[case("GATTACA", "TGTAATC")]
    fn complements_and_reverses(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(reverse_complement(input).unwrap().as_str(), expected);
    }

    #[test]
    fn rejects_non_acgt_before_transforming() {
        assert_eq!(
            reverse_complement("ATCX").unwrap_err(),
            DesignError::InvalidBase { base: 'X', position: 3 }
        );
        assert_eq!(
            reverse_complement("NACG").unwrap_err(),
            DesignError::InvalidBase { base: 'N', position: 0 }
        );
        assert!(reverse_complement("ACGU").is_err());
        assert_eq!(
            reverse_complement("AÅCG").unwrap_err(),
            DesignError::InvalidBase { base: 'Å', position: 1 }
        );
    }

    #[test]
    fn is_an_involution() {
        for s in ["A", "ACGTTGCA", "TCACTGATCTGGCCGTAGACCA", "GGGAAACCCTTT"] {
            let once = reverse_complement(s).unwrap();
            assert_eq!(once.reverse_complement().as_str(), s);
        }
    }

    #[test]
    fn detects_self_complementary_sequences() {
        assert!(Sequence::from_dna("ACGT").unwrap().is_self_complementary());
        assert!(Sequence::from_dna("GCGCGCGCGCGCGCGC").unwrap().is_self_complementary());
        assert!(!Sequence::from_dna("AACG").unwrap().is_self_complementary());
    }
}
