//! Validated DNA sequences and the free-text parser that produces them.
//!
//! A [`Sequence`] is an immutable, uppercase string over `{A, C, G, T}`. The only
//! ways to obtain one are [`parse`] (lenient: accepts RNA, FASTA headers, spacing
//! and digits) and [`Sequence::from_dna`] (strict: ACGT only, any case).
//!
//! # Examples
//! ```
//! use lampdesign::sequence::{parse, ParseResult};
//! let r = parse(">hsa-let-7a\nugag guag\n");
//! assert_eq!(r, ParseResult::Valid(lampdesign::Sequence::from_dna("TGAGGTAG").unwrap()));
//! ```
use core::fmt;

use bio::alphabets::dna;
use serde::Serialize;

use crate::error::{DesignError, Result};

/// Message reported for any letter outside `A`, `C`, `G`, `U`.
pub const INVALID_CHARACTERS: &str = "Invalid characters. Only A, C, G, U allowed.";

/// An uppercase DNA sequence. Non-empty implies every byte is one of `ACGT`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    /// The empty sequence (GC = 0, Tm = 0, ΔG = 0).
    pub fn empty() -> Self { Self(String::new()) }

    /// Strictly validate `s` as DNA. Input is upper-cased first; every base is
    /// checked before the value is constructed.
    pub fn from_dna(s: &str) -> Result<Self> {
        let upper = s.to_ascii_uppercase();
        check_acgt(&upper)?;
        Ok(Self(upper))
    }

    /// Caller guarantees `s` is uppercase ACGT.
    pub(crate) fn from_validated(s: String) -> Self { Self(s) }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn as_bytes(&self) -> &[u8] { self.0.as_bytes() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Sequence with the first `n` bases removed; empty when `n >= len`.
    pub fn trim_start(&self, n: usize) -> Self {
        Self(self.0.get(n..).unwrap_or_default().to_string())
    }

    /// `self` followed by `other`.
    pub fn join(&self, other: &Sequence) -> Self {
        Self([self.as_str(), other.as_str()].concat())
    }

    /// Count of G and C bases.
    pub fn gc_count(&self) -> usize {
        self.0.bytes().filter(|b| matches!(b, b'G' | b'C')).count()
    }

    /// Count of A and T bases.
    pub fn at_count(&self) -> usize {
        self.len() - self.gc_count()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Validate an upper-cased string against the DNA alphabet, reporting the first
/// offending character and its character (not byte) position.
pub(crate) fn check_acgt(s: &str) -> Result<()> {
    let alphabet = dna::alphabet();
    let is_base = |c: char| c.is_ascii_uppercase() && alphabet.is_word([c as u8]);
    match s.chars().enumerate().find(|&(_, c)| !is_base(c)) {
        Some((position, base)) => Err(DesignError::InvalidBase { base, position }),
        None => Ok(()),
    }
}

/// Outcome of [`parse`]: either a normalized DNA sequence or a rejection reason.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseResult {
    Valid(Sequence),
    Invalid(String),
}

impl ParseResult {
    pub fn is_valid(&self) -> bool { matches!(self, ParseResult::Valid(_)) }

    /// Convert into a `Result`, mapping a rejection to [`DesignError::InvalidSequence`].
    pub fn into_result(self) -> Result<Sequence> {
        match self {
            ParseResult::Valid(seq) => Ok(seq),
            ParseResult::Invalid(reason) => Err(DesignError::InvalidSequence { reason }),
        }
    }
}

/// Normalize free text into a DNA sequence.
///
/// Steps, in order: drop every line starting with `>`; drop every non-letter;
/// upper-case; reject any letter other than `A`, `C`, `G`, `U`; translate `U` to `T`.
/// Input that is empty after stripping yields `Valid` with an empty sequence.
pub fn parse(raw: &str) -> ParseResult {
    let letters: String = raw
        .lines()
        .filter(|line| !line.starts_with('>'))
        .flat_map(str::chars)
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if !letters.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'U')) {
        return ParseResult::Invalid(INVALID_CHARACTERS.to_string());
    }
    ParseResult::Valid(Sequence::from_validated(letters.replace('U', "T")))
}

/// Length and GC% of a parsed input, as shown next to each target.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SequenceSummary {
    pub length: usize,
    pub gc_percent: u8,
}

impl SequenceSummary {
    pub fn of(seq: &Sequence) -> Self {
        Self { length: seq.len(), gc_percent: crate::thermo::gc_content(seq) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("acgU", "ACGT")]
    #[case("", "")]
    #[case("  a c\tg u \n12 3", "ACGT")]
    #[case(">seq1 description\nACGU\n>seq2\nuuaa", "ACGTTTAA")]
    #[case("A-C.G_U", "ACGT")]
    #[case(">header only", "")]
    fn parse_normalizes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(parse(raw), ParseResult::Valid(Sequence::from_validated(expected.to_string())));
    }

    #[rstest]
    #[case("ACGX")]
    #[case("ACGT")]
    #[case("atcgU")]
    #[case("acgn")]
    fn parse_rejects_foreign_letters(#[case] raw: &str) {
        // T is DNA, not part of the RNA input alphabet.
        assert_eq!(parse(raw), ParseResult::Invalid(INVALID_CHARACTERS.to_string()));
    }

    #[test]
    fn header_marker_only_counts_at_line_start() {
        // A '>' mid-line is punctuation and is stripped like any other symbol.
        assert_eq!(parse("AC>GU"), ParseResult::Valid(Sequence::from_validated("ACGT".into())));
    }

    #[test]
    fn invalid_parse_maps_to_invalid_sequence() {
        let err = parse("ACGX").into_result().unwrap_err();
        assert_eq!(err, DesignError::InvalidSequence { reason: INVALID_CHARACTERS.to_string() });
    }

    #[test]
    fn from_dna_uppercases_and_reports_first_bad_base() {
        assert_eq!(Sequence::from_dna("acgt").unwrap().as_str(), "ACGT");
        assert_eq!(
            Sequence::from_dna("ACUX").unwrap_err(),
            DesignError::InvalidBase { base: 'U', position: 2 }
        );
        assert_eq!(Sequence::from_dna("").unwrap(), Sequence::empty());
    }

    #[test]
    fn non_ascii_base_is_reported_as_a_character() {
        assert_eq!(
            Sequence::from_dna("AÅCG").unwrap_err(),
            DesignError::InvalidBase { base: 'Å', position: 1 }
        );
        assert_eq!(
            Sequence::from_dna("ÅÅX").unwrap_err(),
            DesignError::InvalidBase { base: 'Å', position: 0 }
        );
    }

    #[test]
    fn trim_start_handles_short_sequences() {
        let s = Sequence::from_dna("ACGT").unwrap();
        assert_eq!(s.trim_start(2).as_str(), "GT");
        assert!(s.trim_start(4).is_empty());
        assert!(Sequence::from_dna("A").unwrap().trim_start(2).is_empty());
    }

    #[test]
    fn summary_reports_length_and_gc() {
        let s = Sequence::from_dna("GCAT").unwrap();
        assert_eq!(SequenceSummary::of(&s), SequenceSummary { length: 4, gc_percent: 50 });
    }
}
