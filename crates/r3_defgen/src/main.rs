//! Def cache builder CLI
//!
//! Generates reclaimed body-part defs from a def catalog snapshot and
//! packs them into the MessagePack+LZ4 artifact the host loads at
//! startup.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "r3_defgen")]
#[command(about = "Generate reclaimed body-part defs from a def catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build a def cache artifact from a catalog JSON file
    Build {
        /// Input catalog JSON path; omit to use the embedded sample
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output MsgPack+LZ4 artifact path
        #[arg(long)]
        out: PathBuf,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = "v1")]
        schema_version: String,

        /// Verify the artifact after building
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Print the generation report for a catalog without writing anything
    Report {
        /// Input catalog JSON path; omit to use the embedded sample
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Query what a source def degrades into at a remaining fraction
    Query {
        /// Artifact path written by `build`
        #[arg(long)]
        artifact: PathBuf,

        /// Source def name, e.g. "BionicEye"
        #[arg(long)]
        def: String,

        /// Remaining condition fraction, e.g. 0.8
        #[arg(long)]
        fraction: f32,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            catalog,
            out,
            schema_version,
            verify,
            metadata,
        } => {
            println!("🔨 Building reclaimed def cache...");
            match &catalog {
                Some(path) => println!("   Catalog: {}", path.display()),
                None => println!("   Catalog: embedded sample"),
            }
            println!("   Output:  {}", out.display());
            println!("   Schema:  {}", schema_version);

            let summary = match catalog {
                Some(path) => r3_defgen::build_def_cache(&path, &out, &schema_version)?,
                None => r3_defgen::build_sample_cache(&out, &schema_version)?,
            };

            print_summary(&summary);

            if verify {
                verify_artifact_integrity(&out, &summary.metadata.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &summary)?;
            }
        }

        Commands::Report { catalog } => {
            let catalog = load_catalog(catalog)?;
            let mut sink = r3_core::CollectSink::default();
            let output = r3_core::generate_reclaimed_defs(&catalog, &mut sink);

            println!("📊 Generation report");
            println!("   Candidates: {}", output.report.candidates);
            println!("   Generated:  {}", output.report.generated);
            for (bucket, count) in &output.report.buckets {
                println!("   {:24} {}", bucket, count);
            }
            if sink.diags.is_empty() {
                println!("   No diagnostics");
            } else {
                for diag in &sink.diags {
                    println!("   ⚠️  {}", diag);
                }
            }
        }

        Commands::Query {
            artifact,
            def,
            fraction,
        } => {
            let doc = r3_core::read_artifact(&artifact)?;
            let cache = r3_core::LookupCache::build(doc.defs);
            let settings = r3_core::ReclamationSettings::default();

            let source = r3_core::DefName::from(def.as_str());
            println!("🔍 {} at {:.0}% remaining:", source, fraction * 100.0);
            match cache.extractable_def(&source, fraction, &settings) {
                Some(found) => {
                    println!("   {} ({}, {})", found.def_name, found.reclamation, found.complexity)
                }
                None if cache.reclaimed_forms(&source).is_empty() => {
                    println!("   {} has no reclaimed forms", source)
                }
                None => println!("   Destroyed outright, nothing left to reclaim"),
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_catalog(path: Option<PathBuf>) -> Result<r3_core::DefCatalog> {
    match path {
        Some(path) => Ok(r3_core::DefCatalog::load(&path)?),
        None => Ok(r3_core::sample_catalog()?.clone()),
    }
}

#[cfg(feature = "cli")]
fn print_summary(summary: &r3_defgen::BuildSummary) {
    let meta = &summary.metadata;

    println!("\n✅ Def cache built successfully!");
    println!("   Candidates:      {}", summary.report.candidates);
    println!("   Generated defs:  {}", meta.def_count);
    println!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    println!(
        "   Compressed size: {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);

    for diag in &summary.diagnostics {
        println!("   ⚠️  {}", diag);
    }
}

#[cfg(feature = "cli")]
fn verify_artifact_integrity(artifact_path: &std::path::Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying artifact integrity...");
    let is_valid = r3_core::export::verify_artifact(artifact_path, checksum)?;

    if is_valid {
        println!("✅ Artifact verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Artifact verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &PathBuf, summary: &r3_defgen::BuildSummary) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(&summary.metadata)?;
    std::fs::write(path, metadata_json)?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("r3_defgen CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
