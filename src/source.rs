//! Where the non-target primer regions come from.
//!
//! [`PrimerSource`] supplies every sequence the builder does not derive from the
//! targets themselves. [`PlaceholderPrimerSource`] returns the fixed values in
//! [`crate::data::placeholders`]; an optimizer that actually picks cut points
//! implements the same trait and is passed to
//! [`crate::builder::build_primer_set_with`].
use crate::data::placeholders::{self, FixedPrimer};
use crate::error::Result;
use crate::primer::{Hairpin, PrimerRole};
use crate::sequence::Sequence;

/// LF, LB, F1c and B1c for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Regions {
    pub lf: Sequence,
    pub lb: Sequence,
    pub f1c: Sequence,
    pub b1c: Sequence,
}

/// BIP and B2 for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct BackwardPair {
    pub bip: Sequence,
    pub b2: Sequence,
}

pub trait PrimerSource {
    /// Loop primers and the F1c/B1c regions.
    fn regions(&self) -> Result<Regions>;

    /// BIP/B2 when the architecture has no second target.
    fn single_target_backward(&self) -> Result<BackwardPair>;

    /// 5' adapter joined to F2 to form FIP.
    fn fip_adapter(&self) -> Result<Sequence>;

    /// 5' adapter joined to the trimmed second target to form BIP.
    fn bip_adapter(&self) -> Result<Sequence>;

    /// Hairpin classification for `role`; `None` for roles that carry none.
    fn hairpin(&self, role: PrimerRole) -> Option<Hairpin>;
}

/// Fixed stand-in values. Hairpins are reported, not computed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderPrimerSource;

fn fixed(p: FixedPrimer) -> Result<Sequence> {
    Sequence::from_dna(p.sequence)
}

impl PrimerSource for PlaceholderPrimerSource {
    fn regions(&self) -> Result<Regions> {
        Ok(Regions {
            lf: fixed(placeholders::LF)?,
            lb: fixed(placeholders::LB)?,
            f1c: fixed(placeholders::F1C)?,
            b1c: fixed(placeholders::B1C)?,
        })
    }

    fn single_target_backward(&self) -> Result<BackwardPair> {
        Ok(BackwardPair {
            bip: fixed(placeholders::BIP_SINGLE)?,
            b2: fixed(placeholders::B2_SINGLE)?,
        })
    }

    fn fip_adapter(&self) -> Result<Sequence> {
        Sequence::from_dna(placeholders::FIP_ADAPTER)
    }

    fn bip_adapter(&self) -> Result<Sequence> {
        Sequence::from_dna(placeholders::BIP_ADAPTER)
    }

    fn hairpin(&self, role: PrimerRole) -> Option<Hairpin> {
        match role {
            PrimerRole::FIP => Some(Hairpin::Weak(1)),
            r if r.has_hairpin() => Some(Hairpin::Absent),
            _ => None,
        }
    }
}
