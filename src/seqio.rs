//! Batch oligo input from **FASTA / FASTQ (optionally gzipped)** files.
//!
//! ### Design
//! - Records are parsed with `needletail`; each record's bases go through the
//!   same [`crate::sequence::parse`] normalization as typed input, so RNA
//!   oligos are accepted and converted to DNA. A record the RNA parser rejects
//!   is retried as DNA with [`Sequence::from_dna`], so primer files written
//!   with `T` profile as well.
//! - Profiling runs on a local Rayon pool; `threads = None` uses all logical cores.
//! - A record neither path accepts is reported in its [`OligoProfile`]; it does not
//!   abort the batch.
//!
//! ### Errors
//! File and format errors are bubbled via `anyhow::Result` to the caller.
//!
//! ### Example
//! ```no_run
//! use lampdesign::{seqio, thermo::ReactionConditions};
//! let profiles = seqio::profile_file("oligos.fa", Some(4), &ReactionConditions::default()).unwrap();
//! for p in &profiles { println!("{} {:?}", p.id, p.outcome); }
//! ```
use std::path::Path;

use anyhow::Result;
use needletail::parse_fastx_file;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::sequence::{parse, Sequence};
use crate::thermo::{ReactionConditions, ThermoProfile};

/// A named oligo as read from a file, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOligo {
    pub id: String,
    pub raw: String,
}

/// Per-record result of batch profiling.
#[derive(Debug, Clone, PartialEq)]
pub struct OligoProfile {
    pub id: String,
    pub outcome: std::result::Result<(Sequence, ThermoProfile), String>,
}

/// Read every record of a FASTA/FASTQ file in file order.
pub fn read_oligos<P: AsRef<Path>>(path: P) -> Result<Vec<RawOligo>> {
    let mut reader = parse_fastx_file(path.as_ref())?;
    let mut out = Vec::new();
    while let Some(record) = reader.next() {
        let rec = record?;
        let id = String::from_utf8_lossy(rec.id()).to_string();
        let raw = String::from_utf8_lossy(&rec.seq()).to_string();
        out.push(RawOligo { id, raw });
    }
    Ok(out)
}

/// Normalize and profile one oligo: RNA first, then strict DNA. When both fail
/// the RNA parser's reason is reported.
pub fn profile_one(oligo: &RawOligo, cond: &ReactionConditions) -> OligoProfile {
    let outcome = parse(&oligo.raw)
        .into_result()
        .or_else(|rna_err| as_dna(&oligo.raw).map_err(|_| rna_err))
        .map(|seq| {
            let p = ThermoProfile::of(&seq, cond);
            (seq, p)
        })
        .map_err(|e| e.to_string());
    OligoProfile { id: oligo.id.clone(), outcome }
}

fn as_dna(raw: &str) -> crate::error::Result<Sequence> {
    let letters: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Sequence::from_dna(&letters)
}

/// Profile a batch in parallel, preserving input order. `cond` is validated once
/// up front.
pub fn profile_all(oligos: &[RawOligo], threads: Option<usize>, cond: &ReactionConditions) -> Result<Vec<OligoProfile>> {
    cond.validate()?;
    let n = threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = ThreadPoolBuilder::new().num_threads(n).build()?;
    Ok(pool.install(|| oligos.par_iter().map(|o| profile_one(o, cond)).collect()))
}

/// Core driver: read a file and profile every record.
pub fn profile_file<P: AsRef<Path>>(path: P, threads: Option<usize>, cond: &ReactionConditions) -> Result<Vec<OligoProfile>> {
    let oligos = read_oligos(path)?;
    profile_all(&oligos, threads, cond)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fasta(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".fa").tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn reads_records_in_order() {
        let f = fasta(">lf\nTCACTGATCTGGCCGTAGACCA\n>mir\nUGAGGUAGUAGG\nUUGUAUAGUU\n");
        let oligos = read_oligos(f.path()).unwrap();
        assert_eq!(oligos.len(), 2);
        assert_eq!(oligos[0].id, "lf");
        assert_eq!(oligos[1].raw, "UGAGGUAGUAGGUUGUAUAGUU");
    }

    #[test]
    fn profiles_rna_and_dna_records_and_reports_rejects() {
        let f = fasta(">rna\nUGAGGUAGUAGGUUGUAUAGUU\n>dna\nTCACTGATCTGGCCGTAGACCA\n>bad\nACGTU\n");
        let out = profile_file(f.path(), Some(2), &ReactionConditions::default()).unwrap();
        assert_eq!(out.len(), 3);
        let (seq, p) = out[0].outcome.as_ref().unwrap();
        assert_eq!(seq.as_str(), "TGAGGTAGTAGGTTGTATAGTT");
        assert_eq!(p.length, 22);
        let (seq, p) = out[1].outcome.as_ref().unwrap();
        assert_eq!(seq.as_str(), "TCACTGATCTGGCCGTAGACCA");
        assert_eq!(p.length, 22);
        assert_eq!(p.gc_percent, 55);
        // Mixed T and U is neither RNA nor DNA.
        assert_eq!(out[2].outcome, Err("Invalid sequence: Invalid characters. Only A, C, G, U allowed.".to_string()));
    }

    #[test]
    fn dna_primer_matches_its_rna_spelling() {
        let cond = ReactionConditions::default();
        let dna = profile_one(&RawOligo { id: "lf".into(), raw: "tcactgatctggccgtagacca".into() }, &cond);
        let rna = profile_one(&RawOligo { id: "lf".into(), raw: "UCACUGAUCUGGCCGUAGACCA".into() }, &cond);
        assert_eq!(dna, rna);
    }

    #[test]
    fn batch_rejects_unusable_conditions() {
        let oligos = [RawOligo { id: "o".into(), raw: "ACGU".into() }];
        let cond = ReactionConditions { primer_um: 0.0, ..Default::default() };
        assert!(profile_all(&oligos, Some(1), &cond).is_err());
    }

    #[test]
    fn parallel_matches_sequential() {
        let oligos: Vec<RawOligo> = ["UGAGGUAGUAGGUUGUAUAGUU", "UAGCUUAUCAGACUGAUGUUGA", "ACGU", "GCGCGCGCGCGCGCGC"]
            .iter()
            .enumerate()
            .map(|(i, s)| RawOligo { id: format!("o{i}"), raw: s.to_string() })
            .collect();
        let cond = ReactionConditions::default();
        let seq: Vec<_> = oligos.iter().map(|o| profile_one(o, &cond)).collect();
        assert_eq!(profile_all(&oligos, Some(3), &cond).unwrap(), seq);
    }
}
