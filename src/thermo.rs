//! Oligo thermodynamics: GC content, melting temperature and duplex free energy.
//!
//! Tm and ΔG use the unified nearest-neighbour parameters (SantaLucia, 1998) held
//! once in [`NN_TABLE`] and shared by both calculators. Salt handling folds Mg²⁺
//! (less dNTP chelation) into an effective monovalent concentration and applies
//! the entropic correction `0.368 · (N − 1) · ln[Na⁺]`.
//!
//! Oligos shorter than [`NN_MIN_LEN`] fall back to the Wallace rule for Tm.
//!
//! # Examples
//! ```
//! use lampdesign::thermo::{gc_content, melting_temperature, ReactionConditions};
//! use lampdesign::Sequence;
//! let s = Sequence::from_dna("ACGTACGTAC").unwrap();
//! assert_eq!(gc_content(&s), 50);
//! // 2·(A+T) + 4·(G+C) + 5
//! assert_eq!(melting_temperature(&s, &ReactionConditions::default()), 35.0);
//! ```
use serde::Serialize;

use crate::error::{DesignError, Result};
use crate::sequence::Sequence;

/// Gas constant, cal/(mol·K).
pub const GAS_CONSTANT: f64 = 1.987;

/// Absolute zero offset.
const KELVIN: f64 = 273.15;

/// Shortest oligo given a nearest-neighbour Tm; anything shorter uses the
/// Wallace rule.
pub const NN_MIN_LEN: usize = 14;

/// Duplex initiation (ΔH kcal/mol, ΔS cal/mol·K).
pub const INITIATION: NnParam = NnParam { dh: 0.2, ds: -5.7 };

/// Applied once per terminal A or T.
pub const TERMINAL_AT_PENALTY: NnParam = NnParam { dh: 2.3, ds: 4.1 };

/// Entropy correction for self-complementary duplexes (ΔG only).
pub const SYMMETRY_DS: f64 = -1.4;

/// Enthalpy/entropy contribution of one nearest-neighbour step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NnParam {
    /// kcal/mol
    pub dh: f64,
    /// cal/(mol·K)
    pub ds: f64,
}

const fn nn(dh: f64, ds: f64) -> NnParam { NnParam { dh, ds } }

/// Dinucleotide step parameters indexed `[5' base][3' base]` in `A, C, G, T` order.
pub const NN_TABLE: [[NnParam; 4]; 4] = [
    // AA, AC, AG, AT
    [nn(-7.9, -22.2), nn(-8.4, -22.4), nn(-7.8, -21.0), nn(-7.2, -20.4)],
    // CA, CC, CG, CT
    [nn(-8.5, -22.7), nn(-8.0, -19.9), nn(-10.6, -27.2), nn(-7.8, -21.0)],
    // GA, GC, GG, GT
    [nn(-8.2, -22.2), nn(-9.8, -24.4), nn(-8.0, -19.9), nn(-8.4, -22.4)],
    // TA, TC, TG, TT
    [nn(-7.2, -21.3), nn(-8.2, -22.2), nn(-8.5, -22.7), nn(-7.9, -22.2)],
];

fn base_index(b: u8) -> usize {
    match b {
        b'A' => 0,
        b'C' => 1,
        b'G' => 2,
        _ => 3,
    }
}

/// Step parameters for the dinucleotide `a`→`b`. Both bytes must be uppercase ACGT.
pub fn nn_step(a: u8, b: u8) -> NnParam {
    NN_TABLE[base_index(a)][base_index(b)]
}

/// Buffer and reaction conditions consumed by the Tm and ΔG calculators.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReactionConditions {
    /// Na⁺, mM.
    pub na_mm: f64,
    /// Mg²⁺, mM.
    pub mg_mm: f64,
    /// Primer strand concentration, µM.
    pub primer_um: f64,
    /// dNTP total, mM.
    pub dntp_mm: f64,
    /// Reaction temperature for ΔG, °C. Isothermal LAMP runs at 60–65 °C.
    pub temperature_c: f64,
}

impl Default for ReactionConditions {
    fn default() -> Self {
        Self { na_mm: 50.0, mg_mm: 8.0, primer_um: 0.25, dntp_mm: 0.8, temperature_c: 65.0 }
    }
}

impl ReactionConditions {
    /// Free Mg²⁺ after dNTP chelation, mM (never negative).
    pub fn effective_mg_mm(&self) -> f64 {
        (self.mg_mm - self.dntp_mm).max(0.0)
    }

    /// Monovalent-equivalent concentration, mM.
    pub fn effective_na_mm(&self) -> f64 {
        self.na_mm + 120.0 * self.effective_mg_mm().sqrt()
    }

    /// Entropy salt correction for an oligo of `len` bases.
    pub fn salt_correction(&self, len: usize) -> f64 {
        0.368 * (len as f64 - 1.0) * (self.effective_na_mm() / 1000.0).ln()
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("na_mm", self.na_mm),
            ("mg_mm", self.mg_mm),
            ("primer_um", self.primer_um),
            ("dntp_mm", self.dntp_mm),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(DesignError::InvalidParameter(format!("{name} must be a finite, non-negative concentration (got {v})")));
            }
        }
        if self.primer_um == 0.0 {
            return Err(DesignError::InvalidParameter("primer_um must be greater than zero".into()));
        }
        if self.effective_na_mm() <= 0.0 {
            return Err(DesignError::InvalidParameter("effective monovalent concentration must be greater than zero".into()));
        }
        if !self.temperature_c.is_finite() || self.temperature_c <= -KELVIN {
            return Err(DesignError::InvalidParameter(format!("temperature_c must be above absolute zero (got {})", self.temperature_c)));
        }
        Ok(())
    }
}

/// GC content as a whole percentage, rounded half-up; 0 for an empty sequence.
pub fn gc_content(seq: &Sequence) -> u8 {
    if seq.is_empty() {
        return 0;
    }
    (seq.gc_count() as f64 * 100.0 / seq.len() as f64).round() as u8
}

/// Summed ΔH/ΔS: initiation, every overlapping step and terminal A/T penalties.
fn nn_totals(seq: &Sequence) -> (f64, f64) {
    let bytes = seq.as_bytes();
    let mut dh = INITIATION.dh;
    let mut ds = INITIATION.ds;
    for w in bytes.windows(2) {
        let step = nn_step(w[0], w[1]);
        dh += step.dh;
        ds += step.ds;
    }
    for &end in [bytes.first(), bytes.last()].into_iter().flatten() {
        if matches!(end, b'A' | b'T') {
            dh += TERMINAL_AT_PENALTY.dh;
            ds += TERMINAL_AT_PENALTY.ds;
        }
    }
    (dh, ds)
}

fn round_to(v: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (v * f).round() / f
}

/// Melting temperature in °C, rounded to one decimal.
///
/// Below [`NN_MIN_LEN`] bases: `2·(A+T) + 4·(G+C) + 5`, no salt correction.
/// Otherwise nearest-neighbour with the salt-corrected entropy and the
/// non-self-complementary strand term `R·ln(Ct/4)`. Empty input yields 0.
pub fn melting_temperature(seq: &Sequence, cond: &ReactionConditions) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    if seq.len() < NN_MIN_LEN {
        return (2 * seq.at_count() + 4 * seq.gc_count() + 5) as f64;
    }
    let (dh, ds) = nn_totals(seq);
    let ds = ds + cond.salt_correction(seq.len());
    let ct = cond.primer_um / 1e6;
    let tm = (dh * 1000.0) / (ds + GAS_CONSTANT * (ct / 4.0).ln()) - KELVIN;
    round_to(tm, 1)
}

/// Duplex ΔG in kcal/mol at `cond.temperature_c`, rounded to two decimals.
///
/// Uses the same parameters as [`melting_temperature`] plus the symmetry
/// correction for self-complementary sequences. Empty input yields 0.
pub fn delta_g(seq: &Sequence, cond: &ReactionConditions) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let (dh, mut ds) = nn_totals(seq);
    if seq.is_self_complementary() {
        ds += SYMMETRY_DS;
    }
    let ds = ds + cond.salt_correction(seq.len());
    let t = cond.temperature_c + KELVIN;
    round_to(dh - t * ds / 1000.0, 2)
}

/// Derived properties of one oligo. Recomputed from a [`Sequence`], never edited.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThermoProfile {
    pub length: usize,
    pub gc_percent: u8,
    /// °C
    pub tm: f64,
    /// kcal/mol
    pub dg: f64,
}

impl ThermoProfile {
    pub fn of(seq: &Sequence, cond: &ReactionConditions) -> Self {
        Self {
            length: seq.len(),
            gc_percent: gc_content(seq),
            tm: melting_temperature(seq, cond),
            dg: delta_g(seq, cond),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn seq(s: &str) -> Sequence { Sequence::from_dna(s).unwrap() }

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[rstest]
    #[case("", 0)]
    #[case("GCGC", 100)]
    #[case("ATAT", 0)]
    #[case("GCAT", 50)]
    #[case("GCA", 67)]
    #[case("GAAAAAAA", 13)]
    #[case("GCAAAAAA", 25)]
    fn gc_rounds_half_up(#[case] s: &str, #[case] expected: u8) {
        assert_eq!(gc_content(&seq(s)), expected);
    }

    #[test]
    fn table_is_symmetric_under_reverse_complement() {
        // Step XY on one strand pairs with comp(Y)comp(X) on the other.
        let comp = |b: u8| match b { b'A' => b'T', b'T' => b'A', b'C' => b'G', _ => b'C' };
        for a in *b"ACGT" {
            for b in *b"ACGT" {
                assert_eq!(nn_step(a, b), nn_step(comp(b), comp(a)), "{}{}", a as char, b as char);
            }
        }
    }

    #[rstest]
    #[case("ACGTACGTAC", 35.0)]
    #[case("ACGT", 17.0)]
    #[case("A", 7.0)]
    #[case("GGGGGGGGGGGGG", 57.0)]
    fn short_oligos_use_wallace(#[case] s: &str, #[case] expected: f64) {
        let s = seq(s);
        let wallace = (2 * s.at_count() + 4 * s.gc_count() + 5) as f64;
        assert_eq!(melting_temperature(&s, &ReactionConditions::default()), wallace);
        assert_eq!(wallace, expected);
    }

    #[test]
    fn nearest_neighbour_starts_at_fourteen_bases() {
        let c = ReactionConditions::default();
        let below = seq(&"GC".repeat(7)[..NN_MIN_LEN - 1]);
        let at = seq(&"GC".repeat(7));
        assert_eq!(at.len(), NN_MIN_LEN);
        assert_eq!(melting_temperature(&below, &c), 57.0);
        // Wallace would give 4·14 + 5 = 61.
        assert!(melting_temperature(&at, &c) > 70.0);
    }

    #[rstest]
    #[case("GAGGTAGTAGGTTGTATAGTT", 55.3)]
    #[case("TCACTGATCTGGCCGTAGACCA", 65.0)]
    #[case("CGGAGAGGTCGCGATAGTCA", 65.2)]
    #[case("ATCGATCGATCGATCG", 53.7)]
    #[case("GCGCGCGCGCGCGCGC", 81.5)]
    fn nearest_neighbour_tm(#[case] s: &str, #[case] expected: f64) {
        let tm = melting_temperature(&seq(s), &ReactionConditions::default());
        assert!(close(tm, expected), "{s}: {tm} != {expected}");
    }

    #[rstest]
    #[case("GAGGTAGTAGGTTGTATAGTT", -6.56)]
    #[case("TCACTGATCTGGCCGTAGACCA", -11.17)]
    #[case("ATCGATCGATCGATCG", -6.78)]
    #[case("GCGCGCGCGCGCGCGC", -17.76)]
    #[case("ACGT", 1.74)]
    fn delta_g_at_reaction_temperature(#[case] s: &str, #[case] expected: f64) {
        let dg = delta_g(&seq(s), &ReactionConditions::default());
        assert!(close(dg, expected), "{s}: {dg} != {expected}");
    }

    #[test]
    fn empty_sequence_is_degenerate_not_an_error() {
        let c = ReactionConditions::default();
        let p = ThermoProfile::of(&Sequence::empty(), &c);
        assert_eq!(p, ThermoProfile { length: 0, gc_percent: 0, tm: 0.0, dg: 0.0 });
    }

    #[test]
    fn results_are_deterministic() {
        let s = seq("TGACAGGACATCGGTGACAGT");
        let c = ReactionConditions::default();
        let a = (melting_temperature(&s, &c), delta_g(&s, &c));
        for _ in 0..8 {
            let b = (melting_temperature(&s, &c), delta_g(&s, &c));
            assert_eq!(a.0.to_bits(), b.0.to_bits());
            assert_eq!(a.1.to_bits(), b.1.to_bits());
        }
    }

    #[test]
    fn delta_g_uses_reaction_temperature_not_tm() {
        let s = seq("TCACTGATCTGGCCGTAGACCA");
        let warm = ReactionConditions { temperature_c: 65.0, ..Default::default() };
        let cool = ReactionConditions { temperature_c: 37.0, ..Default::default() };
        assert!(delta_g(&s, &cool) < delta_g(&s, &warm));
    }

    #[test]
    fn mg_below_dntp_contributes_nothing() {
        let c = ReactionConditions { mg_mm: 0.5, dntp_mm: 0.8, ..Default::default() };
        assert_eq!(c.effective_mg_mm(), 0.0);
        assert_eq!(c.effective_na_mm(), 50.0);
    }

    #[rstest]
    #[case(ReactionConditions { na_mm: -1.0, ..Default::default() })]
    #[case(ReactionConditions { primer_um: 0.0, ..Default::default() })]
    #[case(ReactionConditions { na_mm: 0.0, mg_mm: 0.0, ..Default::default() })]
    #[case(ReactionConditions { mg_mm: f64::NAN, ..Default::default() })]
    #[case(ReactionConditions { temperature_c: -300.0, ..Default::default() })]
    fn rejects_unusable_conditions(#[case] c: ReactionConditions) {
        assert!(matches!(c.validate(), Err(DesignError::InvalidParameter(_))));
    }

    #[test]
    fn default_conditions_are_valid() {
        assert!(ReactionConditions::default().validate().is_ok());
    }
}
