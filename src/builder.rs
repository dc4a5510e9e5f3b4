//! One design run: validated inputs in, a complete [`PrimerSet`] out.
//!
//! The builder is a pure function of its [`DesignRequest`] and the
//! [`PrimerSource`] it is given. It holds no state between runs, so concurrent
//! runs need no coordination. Any failure aborts the whole run; no partial set
//! is ever returned.
use serde::Serialize;

use crate::data::placeholders::{BIP_TARGET_TRIM, F2_TRIM};
use crate::error::{DesignError, Result};
use crate::primer::{Architecture, PrimerRecord, PrimerRole, PrimerSet, Profile, Target};
use crate::sequence::{parse, Sequence, SequenceSummary};
use crate::source::{BackwardPair, PlaceholderPrimerSource, PrimerSource};
use crate::template::assemble_template;
use crate::thermo::{gc_content, ReactionConditions, ThermoProfile};

/// Optimizer targets. Validated and recorded on the [`PrimerSet`]; they do not
/// yet influence any sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DesignParameters {
    /// Target GC content, percent (0–100).
    pub target_gc: u8,
    /// Target melting temperature, °C.
    pub target_tm: f64,
    /// Signed primer length adjustment, bp.
    pub length_adjustment: i32,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self { target_gc: 50, target_tm: 60.0, length_adjustment: 0 }
    }
}

impl DesignParameters {
    pub fn validate(&self) -> Result<()> {
        if self.target_gc > 100 {
            return Err(DesignError::InvalidParameter(format!("target GC must be within 0-100% (got {})", self.target_gc)));
        }
        if !self.target_tm.is_finite() || !(0.0..=100.0).contains(&self.target_tm) {
            return Err(DesignError::InvalidParameter(format!("target Tm must be within 0-100 °C (got {})", self.target_tm)));
        }
        Ok(())
    }
}

/// A named microRNA as entered by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetInput {
    pub name: String,
    pub raw_sequence: String,
}

impl TargetInput {
    pub fn new(name: impl Into<String>, raw_sequence: impl Into<String>) -> Self {
        Self { name: name.into(), raw_sequence: raw_sequence.into() }
    }
}

/// Everything one design run needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DesignRequest {
    pub architecture: Architecture,
    pub mirna1: TargetInput,
    /// Required only when the architecture needs a second target; ignored otherwise.
    pub mirna2: Option<TargetInput>,
    pub parameters: DesignParameters,
    pub conditions: ReactionConditions,
}

/// Build a primer set using the fixed placeholder regions.
///
/// # Examples
/// ```
/// use lampdesign::{build_primer_set, Architecture, DesignRequest, PrimerRole, TargetInput};
/// let req = DesignRequest {
///     architecture: Architecture::F2Only,
///     mirna1: TargetInput::new("let-7a", "UGAGGUAGUAGGUUGUAUAGUU"),
///     ..Default::default()
/// };
/// let set = build_primer_set(&req).unwrap();
/// assert_eq!(set.get(PrimerRole::F2).unwrap().sequence.as_str(), "AGGTAGTAGGTTGTATAGTT");
/// ```
pub fn build_primer_set(req: &DesignRequest) -> Result<PrimerSet> {
    build_primer_set_with(req, &PlaceholderPrimerSource)
}

/// Build a primer set with regions supplied by `source`.
pub fn build_primer_set_with(req: &DesignRequest, source: &dyn PrimerSource) -> Result<PrimerSet> {
    require_present(&req.mirna1, "mirna1")?;
    let second = required_second(req)?;
    if let Some(m) = second {
        require_present(m, "mirna2")?;
    }
    req.parameters.validate()?;
    req.conditions.validate()?;

    let target1 = normalize(&req.mirna1, "mirna1")?;
    let target2 = second.map(|m| normalize(m, "mirna2")).transpose()?;

    let regions = source.regions()?;
    let f2 = target1.sequence.trim_start(F2_TRIM);
    let fip = source.fip_adapter()?.join(&f2);
    let BackwardPair { bip, b2 } = match &target2 {
        Some(t2) => BackwardPair {
            bip: source.bip_adapter()?.join(&t2.sequence.trim_start(BIP_TARGET_TRIM)),
            b2: t2.sequence.clone(),
        },
        None => source.single_target_backward()?,
    };

    let template = assemble_template(
        fip.as_str(),
        regions.lf.as_str(),
        regions.f1c.as_str(),
        regions.b1c.as_str(),
        regions.lb.as_str(),
        bip.as_str(),
    )?;

    let cond = &req.conditions;
    let primer = |role: PrimerRole, sequence: Sequence| PrimerRecord {
        role,
        profile: Profile::Thermo(ThermoProfile::of(&sequence, cond)),
        hairpin: source.hairpin(role),
        sequence,
    };
    let records = vec![
        PrimerRecord {
            role: PrimerRole::Template,
            profile: Profile::Composition { length: template.len(), gc_percent: gc_content(&template) },
            hairpin: None,
            sequence: template,
        },
        primer(PrimerRole::LF, regions.lf),
        primer(PrimerRole::LB, regions.lb),
        primer(PrimerRole::FIP, fip),
        primer(PrimerRole::BIP, bip),
        primer(PrimerRole::F2, f2),
        primer(PrimerRole::B2, b2),
        primer(PrimerRole::F1c, regions.f1c),
        primer(PrimerRole::B1c, regions.b1c),
    ];

    let mut targets = vec![target1];
    targets.extend(target2);
    Ok(PrimerSet {
        architecture: req.architecture,
        targets,
        parameters: req.parameters,
        conditions: *cond,
        records,
    })
}

/// The second target, when the architecture requires one.
fn required_second(req: &DesignRequest) -> Result<Option<&TargetInput>> {
    if !req.architecture.requires_second_target() {
        return Ok(None);
    }
    req.mirna2
        .as_ref()
        .map(Some)
        .ok_or_else(|| DesignError::MissingInput("mirna2 name".into()))
}

fn require_present(input: &TargetInput, label: &str) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(DesignError::MissingInput(format!("{label} name")));
    }
    if input.raw_sequence.trim().is_empty() {
        return Err(DesignError::MissingInput(format!("{label} sequence")));
    }
    Ok(())
}

fn normalize(input: &TargetInput, label: &str) -> Result<Target> {
    let sequence = parse(&input.raw_sequence).into_result()?;
    if sequence.is_empty() {
        return Err(DesignError::MissingInput(format!("{label} sequence")));
    }
    Ok(Target {
        name: input.name.trim().to_string(),
        summary: SequenceSummary::of(&sequence),
        sequence,
    })
}
