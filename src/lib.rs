#![forbid(unsafe_code)]
//! # lampdesign
//!
//! Sequence and thermodynamics engine for **LAMP** (loop-mediated isothermal
//! amplification) primer sets that detect one or two **microRNAs**.
//!
//! The crate turns free-text target input into validated DNA, computes GC
//! content, nearest-neighbour **Tm** and **ΔG**, takes strict reverse
//! complements, and assembles the full primer set (LF, LB, FIP, BIP, F2, B2,
//! F1c, B1c) plus the synthetic double-stranded **template** for a chosen
//! detection [`Architecture`].
//!
//! ## Highlights
//! - Pure, synchronous functions: no I/O, no shared state, no logging in the library.
//! - One nearest-neighbour table ([`thermo::NN_TABLE`]) shared by Tm and ΔG.
//! - Non-target regions come from a swappable [`source::PrimerSource`]; the
//!   default [`source::PlaceholderPrimerSource`] returns fixed sequences.
//!
//! ## Examples
//! ```rust
//! use lampdesign::{build_primer_set, Architecture, DesignRequest, PrimerRole, TargetInput};
//! let req = DesignRequest {
//!     architecture: Architecture::F2AndB2,
//!     mirna1: TargetInput::new("hsa-let-7a-5p", "UGAGGUAGUAGGUUGUAUAGUU"),
//!     mirna2: Some(TargetInput::new("hsa-miR-21-5p", "UAGCUUAUCAGACUGAUGUUGA")),
//!     ..Default::default()
//! };
//! let set = build_primer_set(&req).unwrap();
//! assert_eq!(set.get(PrimerRole::B2).unwrap().sequence.as_str(), "TAGCTTATCAGACTGATGTTGA");
//! for r in set.iter() { println!("{}\t{}", r.role, r.sequence); }
//! ```

pub mod error;
pub mod sequence;
pub mod thermo;
pub mod revcomp;
pub mod template;
pub mod primer;
pub mod source;
pub mod builder;
pub mod report;
pub mod seqio;
pub mod data { pub mod placeholders; }

pub use builder::{build_primer_set, build_primer_set_with, DesignParameters, DesignRequest, TargetInput};
pub use error::DesignError;
pub use primer::{Architecture, Hairpin, PrimerRecord, PrimerRole, PrimerSet, Profile};
pub use revcomp::reverse_complement;
pub use sequence::{parse, ParseResult, Sequence};
pub use template::assemble_template;
pub use thermo::{delta_g, gc_content, melting_temperature, ReactionConditions, ThermoProfile};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience: one row per architecture for CLI/UX.
/// Each row is `(id, label, requires_second_target)`.
pub fn list_architecture_rows() -> Vec<(String, String, bool)> {
    Architecture::ALL
        .iter()
        .map(|a| (a.id().to_string(), a.label().to_string(), a.requires_second_target()))
        .collect()
}

/// Profile a single oligo given as free text.
///
/// The text goes through [`parse`] first, so RNA input and FASTA headers are accepted.
/// `cond` is validated before anything is computed.
///
/// # Examples
/// ```
/// let p = lampdesign::profile_text("acgu", &lampdesign::ReactionConditions::default()).unwrap();
/// assert_eq!((p.length, p.gc_percent, p.tm), (4, 50, 17.0));
/// ```
pub fn profile_text(raw: &str, cond: &ReactionConditions) -> Result<ThermoProfile, DesignError> {
    cond.validate()?;
    let seq = parse(raw).into_result()?;
    Ok(ThermoProfile::of(&seq, cond))
}

#[cfg(test)]
mod cli_support_tests {
    use super::*;

    #[test]
    fn architecture_rows_cover_all_and_flag_the_gate() {
        let rows = list_architecture_rows();
        assert_eq!(rows.len(), 3);
        let gated: Vec<_> = rows.iter().filter(|r| r.2).map(|r| r.0.as_str()).collect();
        assert_eq!(gated, ["f2-and-b2"]);
    }

    #[test]
    fn profile_text_rejects_invalid_letters() {
        let err = profile_text("ACGX", &ReactionConditions::default()).unwrap_err();
        assert!(matches!(err, DesignError::InvalidSequence { .. }));
    }

    #[test]
    fn profile_text_rejects_unusable_conditions() {
        for cond in [
            ReactionConditions { primer_um: 0.0, ..Default::default() },
            ReactionConditions { na_mm: 0.0, mg_mm: 0.0, ..Default::default() },
            ReactionConditions { temperature_c: f64::NAN, ..Default::default() },
        ] {
            let err = profile_text("UGAGGUAGUAGGUUGUAUAGUU", &cond).unwrap_err();
            assert!(matches!(err, DesignError::InvalidParameter(_)), "{cond:?}: {err:?}");
        }
    }
}
