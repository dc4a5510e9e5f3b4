//! Core types for **primer roles**, **records** and **primer sets**.
//!
//! A [`PrimerSet`] is the complete output of one design run: one
//! [`PrimerRecord`] per [`PrimerRole`] plus the targets it was built from. It is
//! immutable once built; a new run produces a new set.
use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::builder::DesignParameters;
use crate::sequence::{Sequence, SequenceSummary};
use crate::thermo::{ReactionConditions, ThermoProfile};

/// Detection architecture. Decides whether a second microRNA is required and
/// how BIP/B2 are derived.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    /// Target 1 sits in F2.
    #[default]
    F2Only,
    /// Target 1 sits in B2. Primer construction is currently identical to [`Architecture::F2Only`].
    B2Only,
    /// AND-gate: target 1 in F2, target 2 in B2.
    F2AndB2,
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [Architecture::F2Only, Architecture::B2Only, Architecture::F2AndB2];

    /// Stable identifier (`f2-only`, `b2-only`, `f2-and-b2`).
    pub fn id(self) -> &'static str {
        match self {
            Architecture::F2Only => "f2-only",
            Architecture::B2Only => "b2-only",
            Architecture::F2AndB2 => "f2-and-b2",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Architecture::F2Only => "F2 Only",
            Architecture::B2Only => "B2 Only",
            Architecture::F2AndB2 => "F2 and B2 (AND-gate)",
        }
    }

    pub fn requires_second_target(self) -> bool {
        matches!(self, Architecture::F2AndB2)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.id()) }
}

impl FromStr for Architecture {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "f2-only" | "f2" => Ok(Architecture::F2Only),
            "b2-only" | "b2" => Ok(Architecture::B2Only),
            "f2-and-b2" | "and" | "and-gate" => Ok(Architecture::F2AndB2),
            other => Err(format!("Unknown architecture: {other} (expected f2-only, b2-only or f2-and-b2)")),
        }
    }
}

/// Named role of a primer (or the template) within a LAMP set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum PrimerRole {
    Template,
    /// Loop forward.
    LF,
    /// Loop backward.
    LB,
    /// Forward inner primer.
    FIP,
    /// Backward inner primer.
    BIP,
    F2,
    B2,
    F1c,
    B1c,
}

impl PrimerRole {
    /// Canonical reporting order.
    pub const ORDER: [PrimerRole; 9] = [
        PrimerRole::Template,
        PrimerRole::LF,
        PrimerRole::LB,
        PrimerRole::FIP,
        PrimerRole::BIP,
        PrimerRole::F2,
        PrimerRole::B2,
        PrimerRole::F1c,
        PrimerRole::B1c,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrimerRole::Template => "Template",
            PrimerRole::LF => "LF",
            PrimerRole::LB => "LB",
            PrimerRole::FIP => "FIP",
            PrimerRole::BIP => "BIP",
            PrimerRole::F2 => "F2",
            PrimerRole::B2 => "B2",
            PrimerRole::F1c => "F1c",
            PrimerRole::B1c => "B1c",
        }
    }

    /// Loop and inner primers carry a hairpin classification; outer regions and
    /// the template do not.
    pub fn has_hairpin(self) -> bool {
        matches!(self, PrimerRole::LF | PrimerRole::LB | PrimerRole::FIP | PrimerRole::BIP)
    }
}

impl fmt::Display for PrimerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Hairpin classification: none, or `k` weak / strong hairpins.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Hairpin {
    Absent,
    Weak(u32),
    Strong(u32),
}

/// Traffic-light rating of a [`Hairpin`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity { Good, Warning, Bad }

impl Hairpin {
    pub fn severity(self) -> Severity {
        match self {
            Hairpin::Absent => Severity::Good,
            Hairpin::Weak(_) => Severity::Warning,
            Hairpin::Strong(_) => Severity::Bad,
        }
    }
}

impl fmt::Display for Hairpin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hairpin::Absent => f.write_str("None"),
            Hairpin::Weak(k) => write!(f, "{k} weak"),
            Hairpin::Strong(k) => write!(f, "{k} strong"),
        }
    }
}

impl From<Hairpin> for String {
    fn from(h: Hairpin) -> Self { h.to_string() }
}

impl FromStr for Hairpin {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(Hairpin::Absent);
        }
        let (count, kind) = s.split_once(' ').ok_or_else(|| format!("Unrecognized hairpin: {s}"))?;
        let k: u32 = count.parse().map_err(|_| format!("Unrecognized hairpin count: {count}"))?;
        match kind.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Hairpin::Weak(k)),
            "strong" => Ok(Hairpin::Strong(k)),
            other => Err(format!("Unrecognized hairpin strength: {other}")),
        }
    }
}

/// Properties reported for a record. The template only gets composition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Profile {
    Thermo(ThermoProfile),
    Composition { length: usize, gc_percent: u8 },
}

impl Profile {
    pub fn length(&self) -> usize {
        match self {
            Profile::Thermo(t) => t.length,
            Profile::Composition { length, .. } => *length,
        }
    }

    pub fn gc_percent(&self) -> u8 {
        match self {
            Profile::Thermo(t) => t.gc_percent,
            Profile::Composition { gc_percent, .. } => *gc_percent,
        }
    }

    pub fn tm(&self) -> Option<f64> {
        match self {
            Profile::Thermo(t) => Some(t.tm),
            Profile::Composition { .. } => None,
        }
    }

    pub fn dg(&self) -> Option<f64> {
        match self {
            Profile::Thermo(t) => Some(t.dg),
            Profile::Composition { .. } => None,
        }
    }
}

/// One named sequence of the set with its derived properties.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimerRecord {
    pub role: PrimerRole,
    pub sequence: Sequence,
    pub profile: Profile,
    /// Present only for roles where [`PrimerRole::has_hairpin`] holds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hairpin: Option<Hairpin>,
}

/// A microRNA the set was designed against, after normalization.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Target {
    pub name: String,
    pub sequence: Sequence,
    pub summary: SequenceSummary,
}

/// Complete result of one design run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimerSet {
    pub architecture: Architecture,
    pub targets: Vec<Target>,
    pub parameters: DesignParameters,
    pub conditions: ReactionConditions,
    /// Records in [`PrimerRole::ORDER`].
    pub records: Vec<PrimerRecord>,
}

impl PrimerSet {
    pub fn get(&self, role: PrimerRole) -> Option<&PrimerRecord> {
        self.records.iter().find(|r| r.role == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimerRecord> {
        self.records.iter()
    }

    pub fn template(&self) -> Option<&Sequence> {
        self.get(PrimerRole::Template).map(|r| &r.sequence)
    }
}
