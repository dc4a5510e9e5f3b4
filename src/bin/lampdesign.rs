use clap::{Args, Parser, Subcommand, ValueEnum};
use polars::prelude::*;

use lampdesign::{
    build_primer_set, report, seqio, Architecture, DesignParameters, DesignRequest, ReactionConditions, TargetInput,
};

/// LAMP primer design CLI
#[derive(Parser)]
#[command(name = "lampdesign")]
#[command(version)]
#[command(about = "LAMP primer sets for microRNA targets: Tm, ΔG, reverse complement and template assembly", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Buffer conditions shared by every thermodynamic subcommand.
#[derive(Args, Clone, Copy)]
struct ConditionArgs {
    /// Na+ concentration (mM)
    #[arg(long, default_value_t = 50.0)]
    na: f64,
    /// Mg2+ concentration (mM)
    #[arg(long, default_value_t = 8.0)]
    mg: f64,
    /// Primer concentration (µM)
    #[arg(long, default_value_t = 0.25)]
    primer: f64,
    /// dNTP concentration (mM)
    #[arg(long, default_value_t = 0.8)]
    dntp: f64,
    /// Reaction temperature for ΔG (°C)
    #[arg(long, default_value_t = 65.0)]
    temperature: f64,
}

impl From<ConditionArgs> for ReactionConditions {
    fn from(a: ConditionArgs) -> Self {
        ReactionConditions { na_mm: a.na, mg_mm: a.mg, primer_um: a.primer, dntp_mm: a.dntp, temperature_c: a.temperature }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List detection architectures
    Architectures,

    /// Build a full primer set for one or two microRNAs
    Design {
        /// Detection architecture (f2-only, b2-only, f2-and-b2)
        #[arg(long, default_value = "f2-only")]
        architecture: Architecture,
        /// First microRNA name
        #[arg(long)]
        mirna1_name: String,
        /// First microRNA sequence (RNA, FASTA text accepted)
        #[arg(long)]
        mirna1: String,
        /// Second microRNA name (f2-and-b2 only)
        #[arg(long)]
        mirna2_name: Option<String>,
        /// Second microRNA sequence (f2-and-b2 only)
        #[arg(long)]
        mirna2: Option<String>,
        /// Target GC content (%)
        #[arg(long, default_value_t = 50)]
        target_gc: u8,
        /// Target Tm (°C)
        #[arg(long, default_value_t = 60.0)]
        target_tm: f64,
        /// Primer length adjustment (bp, may be negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        length_adjustment: i32,
        #[command(flatten)]
        conditions: ConditionArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Profile oligos (length, GC, Tm, ΔG); sequences are RNA or FASTA text
    Thermo {
        /// Sequences given inline
        sequences: Vec<String>,
        /// FASTA/FASTQ file of oligos (optionally gzipped)
        #[arg(long)]
        fasta: Option<String>,
        /// Threads (None = all)
        #[arg(long)]
        threads: Option<usize>,
        #[command(flatten)]
        conditions: ConditionArgs,
    },

    /// Strict reverse complement of a DNA sequence
    Revcomp {
        sequence: String,
    },

    /// Assemble a LAMP template from six primers
    Template {
        #[arg(long)]
        fip: String,
        #[arg(long)]
        lf: String,
        #[arg(long)]
        f1c: String,
        #[arg(long)]
        b1c: String,
        #[arg(long)]
        lb: String,
        #[arg(long)]
        bip: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Architectures => {
            cmd_architectures()?;
        }

        Commands::Design {
            architecture, mirna1_name, mirna1, mirna2_name, mirna2,
            target_gc, target_tm, length_adjustment, conditions, format,
        } => {
            let mirna2 = match (mirna2_name, mirna2) {
                (None, None) => None,
                (name, seq) => Some(TargetInput::new(name.unwrap_or_default(), seq.unwrap_or_default())),
            };
            let req = DesignRequest {
                architecture,
                mirna1: TargetInput::new(mirna1_name, mirna1),
                mirna2,
                parameters: DesignParameters { target_gc, target_tm, length_adjustment },
                conditions: conditions.into(),
            };
            let set = build_primer_set(&req)?;
            eprintln!(
                "design: architecture={} | targets={} | template={} nt",
                set.architecture.label(),
                set.targets.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(","),
                set.template().map_or(0, |t| t.len()),
            );
            match format {
                OutputFormat::Table => {
                    let df = primer_set_frame(&set)?;
                    show_all();
                    println!("{}", df);
                }
                OutputFormat::Csv => report::write_csv(&set, std::io::stdout())?,
                OutputFormat::Json => println!("{}", report::to_json(&set)?),
            }
        }

        Commands::Thermo { sequences, fasta, threads, conditions } => {
            let cond: ReactionConditions = conditions.into();
            cond.validate()?;
            let mut oligos: Vec<seqio::RawOligo> = sequences
                .into_iter()
                .enumerate()
                .map(|(i, raw)| seqio::RawOligo { id: format!("seq{}", i + 1), raw })
                .collect();
            if let Some(path) = fasta {
                oligos.extend(seqio::read_oligos(&path)?);
            }
            if oligos.is_empty() {
                anyhow::bail!("No sequences given. Pass sequences inline or use --fasta <file>.");
            }
            let profiles = seqio::profile_all(&oligos, threads, &cond)?;
            let rejected = profiles.iter().filter(|p| p.outcome.is_err()).count();
            eprintln!("thermo: oligos={} | rejected={} | threads={}", profiles.len(), rejected, threads.map_or_else(|| "all".to_string(), |t| t.to_string()));
            for p in &profiles {
                match &p.outcome {
                    Ok((seq, t)) => println!("{}\t{}\tlen={}\tgc={}%\ttm={:.1}\tdg={:.2}", p.id, seq, t.length, t.gc_percent, t.tm, t.dg),
                    Err(e) => eprintln!("{}\t{}", p.id, e),
                }
            }
        }

        Commands::Revcomp { sequence } => {
            println!("{}", lampdesign::reverse_complement(sequence.trim())?);
        }

        Commands::Template { fip, lf, f1c, b1c, lb, bip } => {
            let t = lampdesign::assemble_template(&fip, &lf, &f1c, &b1c, &lb, &bip)?;
            eprintln!("template: length={} | gc={}%", t.len(), lampdesign::gc_content(&t));
            println!("{}", t);
        }
    }

    Ok(())
}

fn primer_set_frame(set: &lampdesign::PrimerSet) -> PolarsResult<DataFrame> {
    let rows = report::primer_set_rows(set);
    df!(
        "role"     => rows.iter().map(|r| r.0.clone()).collect::<Vec<_>>(),
        "sequence" => rows.iter().map(|r| r.1.clone()).collect::<Vec<_>>(),
        "length"   => rows.iter().map(|r| r.2 as u64).collect::<Vec<_>>(),
        "gc_%"     => rows.iter().map(|r| r.3 as u32).collect::<Vec<_>>(),
        "tm_c"     => rows.iter().map(|r| r.4).collect::<Vec<_>>(),
        "dg"       => rows.iter().map(|r| r.5).collect::<Vec<_>>(),
        "hairpin"  => rows.iter().map(|r| r.6.clone()).collect::<Vec<_>>(),
    )
}

fn cmd_architectures() -> PolarsResult<()> {
    let rows = lampdesign::list_architecture_rows();
    let df = df!(
        "architecture" => rows.iter().map(|r| r.0.clone()).collect::<Vec<_>>(),
        "label"        => rows.iter().map(|r| r.1.clone()).collect::<Vec<_>>(),
        "second_target" => rows.iter().map(|r| r.2).collect::<Vec<_>>(),
    )?;
    show_all();
    println!("{}", df);
    Ok(())
}

/// Configure Polars display to show every row and untruncated sequences.
fn show_all() {
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_COLS", "100000");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
    std::env::set_var("POLARS_FMT_STR_LEN", "100000");
    std::env::set_var("POLARS_TABLE_WIDTH", "65535");
}
