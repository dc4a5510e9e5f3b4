//! Synthetic LAMP template ("ultramer") assembly.
//!
//! The template is a single construct spanning the F1c, F2, LF, F1, B1c, LB, B2c
//! and B1 binding regions. It is built from the six primer strings with fixed
//! linker bases between segments:
//!
//! ```text
//! FIP + rc(LF) + C + rc(F1c) + GT + B1c + G + LB + T + rc(BIP)
//! ```
use crate::error::Result;
use crate::revcomp::reverse_complement;
use crate::sequence::Sequence;

/// Linker between rc(LF) and rc(F1c).
pub const LINKER_LF_F1C: &str = "C";
/// Linker between rc(F1c) and B1c.
pub const LINKER_F1C_B1C: &str = "GT";
/// Linker between B1c and LB.
pub const LINKER_B1C_LB: &str = "G";
/// Linker between LB and rc(BIP).
pub const LINKER_LB_BIP: &str = "T";

/// Concatenate the six primers into the template.
///
/// LF, F1c and BIP are reverse complemented and fail with
/// [`crate::DesignError::InvalidBase`] on any non-ACGT character; FIP, B1c and LB
/// are taken verbatim (upper-cased) under the same alphabet check.
///
/// # Examples
/// ```
/// let t = lampdesign::assemble_template("AAAA", "TT", "GG", "CC", "AA", "TT").unwrap();
/// assert_eq!(t.as_str(), "AAAAAACCCGTCCGAATAA");
/// ```
pub fn assemble_template(fip: &str, lf: &str, f1c: &str, b1c: &str, lb: &str, bip: &str) -> Result<Sequence> {
    let fip = Sequence::from_dna(fip)?;
    let lf_rc = reverse_complement(lf)?;
    let f1c_rc = reverse_complement(f1c)?;
    let b1c = Sequence::from_dna(b1c)?;
    let lb = Sequence::from_dna(lb)?;
    let bip_rc = reverse_complement(bip)?;

    let parts = [
        fip.as_str(),
        lf_rc.as_str(),
        LINKER_LF_F1C,
        f1c_rc.as_str(),
        LINKER_F1C_B1C,
        b1c.as_str(),
        LINKER_B1C_LB,
        lb.as_str(),
        LINKER_LB_BIP,
        bip_rc.as_str(),
    ];
    Ok(Sequence::from_validated(parts.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesignError;
    use pretty_assertions::assert_eq;

    #[test]
    fn concatenates_in_fixed_order_with_linkers() {
        let t = assemble_template("AAAA", "TT", "GG", "CC", "AA", "TT").unwrap();
        let expected = ["AAAA", "AA", "C", "CC", "GT", "CC", "G", "AA", "T", "AA"].concat();
        assert_eq!(t.as_str(), expected);
    }

    #[test]
    fn matches_formula_for_placeholder_primers() {
        let (fip, lf, f1c, b1c, lb, bip) = (
            "CGGAGAGGTCGCGATAGTCATGAGGTAGTAGGTTGTATAGTT",
            "TCACTGATCTGGCCGTAGACCA",
            "CGGAGAGGTCGCGATAGTCA",
            "GATGACAGTGACATCCTGCCT",
            "TGACAGGACATCGGTGACAGT",
            "GATGACAGTGACATCCTGCCTAGGCAGTGTCTTAGCTGGTTGT",
        );
        let t = assemble_template(fip, lf, f1c, b1c, lb, bip).unwrap();
        let rc = |s: &str| reverse_complement(s).unwrap().to_string();
        let expected = format!("{fip}{}C{}GT{b1c}G{lb}T{}", rc(lf), rc(f1c), rc(bip));
        assert_eq!(t.as_str(), expected);
        assert_eq!(t.len(), fip.len() + lf.len() + f1c.len() + b1c.len() + lb.len() + bip.len() + 5);
    }

    #[test]
    fn lowercase_inputs_are_accepted() {
        let upper = assemble_template("AAAA", "TT", "GG", "CC", "AA", "TT").unwrap();
        let lower = assemble_template("aaaa", "tt", "gg", "cc", "aa", "tt").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn malformed_primer_propagates_invalid_base() {
        let err = assemble_template("AAAA", "TX", "GG", "CC", "AA", "TT").unwrap_err();
        assert_eq!(err, DesignError::InvalidBase { base: 'X', position: 1 });
        assert!(assemble_template("AAAA", "TT", "GG", "CC", "AA", "TTU").is_err());
        assert!(assemble_template("AANA", "TT", "GG", "CC", "AA", "TT").is_err());
    }
}
