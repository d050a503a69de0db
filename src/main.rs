use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use prodefeed::{
    parse_group_export_file, parse_knockout_file, run_group_stage, run_knockout,
    write_group_matches, write_knockout_matches, write_teams, Normalizer,
};

#[derive(Parser)]
#[command(name = "prodefeed")]
#[command(author, version, about = "FIFA tournament export to prode feed converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the group-stage export into team.json and matches_2026.json
    GroupStage {
        /// Input FIFA export (JSON)
        #[arg(default_value = "src/main/resources/matches.json")]
        input: PathBuf,

        /// Directory for the generated feed files
        #[arg(default_value = "src/main/resources")]
        output_dir: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Convert the knockout-stage export into knockout_2026.json
    Knockout {
        /// Input FIFA export (JSON)
        #[arg(default_value = "src/main/resources/knockout_stages.json")]
        input: PathBuf,

        /// Directory for the generated feed files
        #[arg(default_value = "src/main/resources")]
        output_dir: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GroupStage {
            input,
            output_dir,
            verbose,
        } => {
            setup_logging(verbose);
            process_group_stage(input, output_dir)
        }
        Commands::Knockout {
            input,
            output_dir,
            verbose,
        } => {
            setup_logging(verbose);
            process_knockout(input, output_dir)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn process_group_stage(input: PathBuf, output_dir: PathBuf) -> Result<()> {
    info!("Reading export from {:?}", input);
    let export = parse_group_export_file(&input)?;

    let normalizer = Normalizer::default();
    let output = run_group_stage(&export, &normalizer);

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let teams_path = write_teams(&output_dir, &output.teams)?;
    info!("Wrote {} teams to {:?}", output.teams.len(), teams_path);

    let matches_path = write_group_matches(&output_dir, &output.matches)?;
    info!(
        "Wrote {} matches to {:?}",
        output.matches.len(),
        matches_path
    );

    println!("Processing complete");
    println!("  Teams: {}", output.teams.len());
    println!("  Matches: {}", output.matches.len());

    Ok(())
}

fn process_knockout(input: PathBuf, output_dir: PathBuf) -> Result<()> {
    info!("Reading export from {:?}", input);
    let stages = parse_knockout_file(&input)?;

    let normalizer = Normalizer::default();
    let matches = run_knockout(&stages, &normalizer);

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let matches_path = write_knockout_matches(&output_dir, &matches)?;
    info!("Wrote {} matches to {:?}", matches.len(), matches_path);

    println!("Processing complete");
    println!("  Knockout matches: {}", matches.len());

    // Per-phase breakdown, sorted by phase name
    let mut phase_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &matches {
        *phase_counts.entry(record.phase.as_str()).or_insert(0) += 1;
    }

    println!();
    println!("Matches by phase");
    println!("----------------");
    for (phase, count) in &phase_counts {
        println!("  {}: {}", phase, count);
    }

    Ok(())
}
