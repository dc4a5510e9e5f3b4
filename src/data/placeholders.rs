//! Fixed primer sequences used until a real design optimizer exists.
//!
//! None of these are derived from the input targets. They are the values the
//! LAMP design workbench shipped as stand-ins for LF, LB, F1c, B1c and the
//! single-target BIP/B2 pair, together with the two inner-primer adapters.
//!
//! Notes:
//! - Sequences are uppercase DNA, 5'→3'.
//! - `FIP_ADAPTER` is F1c followed by a single `T` spacer.
//! - `BIP_ADAPTER` followed by `B2[1..]` reproduces `BIP_SINGLE` exactly.

use crate::primer::PrimerRole;

/// A fixed sequence standing in for a computed primer region.
#[derive(Clone, Copy, Debug)]
pub struct FixedPrimer {
    pub role: PrimerRole,
    pub sequence: &'static str,
    pub notes: &'static str,
}

/// Loop forward primer.
pub const LF: FixedPrimer = FixedPrimer {
    role: PrimerRole::LF,
    sequence: "TCACTGATCTGGCCGTAGACCA",
    notes: "22 nt placeholder loop primer.",
};

/// Loop backward primer.
pub const LB: FixedPrimer = FixedPrimer {
    role: PrimerRole::LB,
    sequence: "TGACAGGACATCGGTGACAGT",
    notes: "21 nt placeholder loop primer.",
};

/// F1c region.
pub const F1C: FixedPrimer = FixedPrimer {
    role: PrimerRole::F1c,
    sequence: "CGGAGAGGTCGCGATAGTCA",
    notes: "Also the 5' part of every FIP.",
};

/// B1c region.
pub const B1C: FixedPrimer = FixedPrimer {
    role: PrimerRole::B1c,
    sequence: "GATGACAGTGACATCCTGCCT",
    notes: "Also the 5' part of every BIP.",
};

/// BIP used when no second target is supplied.
pub const BIP_SINGLE: FixedPrimer = FixedPrimer {
    role: PrimerRole::BIP,
    sequence: "GATGACAGTGACATCCTGCCTAGGCAGTGTCTTAGCTGGTTGT",
    notes: "BIP_ADAPTER + B2_SINGLE[1..].",
};

/// B2 used when no second target is supplied.
pub const B2_SINGLE: FixedPrimer = FixedPrimer {
    role: PrimerRole::B2,
    sequence: "TGGCAGTGTCTTAGCTGGTTGT",
    notes: "22 nt placeholder outer primer.",
};

/// 5' adapter of FIP, prepended to F2 (21 nt).
pub const FIP_ADAPTER: &str = "CGGAGAGGTCGCGATAGTCAT";

/// 5' adapter of BIP, prepended to target 2 minus its first base (22 nt).
pub const BIP_ADAPTER: &str = "GATGACAGTGACATCCTGCCTA";

/// Bases removed from the 5' end of target 1 to form F2.
pub const F2_TRIM: usize = 2;

/// Bases removed from the 5' end of target 2 before joining it to [`BIP_ADAPTER`].
pub const BIP_TARGET_TRIM: usize = 1;

/// Group of all fixed primers.
pub const FIXED_PRIMERS: &[FixedPrimer] = &[LF, LB, F1C, B1C, BIP_SINGLE, B2_SINGLE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapters_have_documented_lengths() {
        assert_eq!(FIP_ADAPTER.len(), 21);
        assert_eq!(BIP_ADAPTER.len(), 22);
    }

    #[test]
    fn adapters_are_consistent_with_regions() {
        assert_eq!(FIP_ADAPTER, format!("{}T", F1C.sequence));
        assert!(BIP_ADAPTER.starts_with(B1C.sequence));
        assert_eq!(BIP_SINGLE.sequence, format!("{BIP_ADAPTER}{}", &B2_SINGLE.sequence[BIP_TARGET_TRIM..]));
    }

    #[test]
    fn every_fixed_primer_is_plain_dna() {
        for p in FIXED_PRIMERS {
            assert!(p.sequence.bytes().all(|b| b"ACGT".contains(&b)), "{}", p.role);
        }
    }
}
