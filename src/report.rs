//! Flat renderings of a [`PrimerSet`] for CLI/UX: rows, CSV and JSON.
//!
//! Rows are emitted in [`crate::PrimerRole::ORDER`]. Fields that do not apply to
//! a record (Tm/ΔG of the template, hairpins of outer primers) are `None` in rows
//! and empty cells in CSV.
use std::io::Write;

use anyhow::Result;

use crate::primer::PrimerSet;

/// `(role, sequence, length, gc_percent, tm, dg, hairpin)`
pub type PrimerRow = (String, String, usize, u8, Option<f64>, Option<f64>, Option<String>);

/// Return one row per record without truncating sequences.
pub fn primer_set_rows(set: &PrimerSet) -> Vec<PrimerRow> {
    set.iter()
        .map(|r| (
            r.role.to_string(),
            r.sequence.to_string(),
            r.profile.length(),
            r.profile.gc_percent(),
            r.profile.tm(),
            r.profile.dg(),
            r.hairpin.map(|h| h.to_string()),
        ))
        .collect()
}

/// Header matching [`primer_set_rows`].
pub const CSV_HEADER: [&str; 7] = ["role", "sequence", "length", "gc_percent", "tm_c", "dg_kcal_mol", "hairpin"];

/// Write the rows as CSV with a header line.
pub fn write_csv<W: Write>(set: &PrimerSet, out: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(CSV_HEADER)?;
    for (role, seq, len, gc, tm, dg, hairpin) in primer_set_rows(set) {
        w.write_record([
            role,
            seq,
            len.to_string(),
            gc.to_string(),
            tm.map(|v| format!("{v:.1}")).unwrap_or_default(),
            dg.map(|v| format!("{v:.2}")).unwrap_or_default(),
            hairpin.unwrap_or_default(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Pretty-printed JSON of the whole set, targets and conditions included.
pub fn to_json(set: &PrimerSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(set)?)
}
