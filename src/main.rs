use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use losat_rbh::api::{self, BlastpCommandline};
use losat_rbh::blastinput::{ResolveArgs, RunArgs};
use losat_rbh::report::{generate_summary, write_rbh_output, ReportContext};
use losat_rbh::sequence::SequenceSet;

#[derive(Parser)]
#[command(name = "losat-rbh")]
#[command(version)]
#[command(about = "Reciprocal best hits between two protein sets via blastp", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run forward and reverse blastp searches, then resolve reciprocal best hits
    Run(RunArgs),

    /// Resolve reciprocal best hits from precomputed forward and reverse tables
    Resolve(ResolveArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG directives are parsed last so they take precedence
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(args: RunArgs) -> Result<()> {
    let config = args.options.rbh_config()?;

    let set_a = SequenceSet::from_fasta(&args.set_a)?;
    let set_b = SequenceSet::from_fasta(&args.set_b)?;
    for set in [&set_a, &set_b] {
        if set.is_empty() {
            log::warn!("{} contains no sequences", set.path().display());
        }
    }

    std::fs::create_dir_all(&args.outdir)
        .with_context(|| format!("creating output directory {}", args.outdir.display()))?;
    let outputs = args.search_outputs();
    let runner = BlastpCommandline::new(args.search_config(), &config.schema);

    let outcome = api::run_rbh(&runner, &args.set_a, &args.set_b, &outputs, &config)
        .context("reciprocal best hit run failed")?;

    let context = ReportContext {
        forward_name: Some(outputs.forward.display().to_string()),
        reverse_name: Some(outputs.reverse.display().to_string()),
        ..Default::default()
    };
    write_rbh_output(&outcome.rbh, args.options.out.as_ref(), &config.output, &context)
        .context("writing RBH table")?;

    let summary = generate_summary(
        &outcome.forward,
        &outcome.reverse,
        &outcome.rbh,
        Some((&set_a, &set_b)),
    );
    for line in summary.lines() {
        log::info!("{}", line);
    }
    Ok(())
}

fn resolve(args: ResolveArgs) -> Result<()> {
    let config = args.options.rbh_config()?;

    let outcome = api::resolve_files(&args.forward, &args.reverse, &config).with_context(|| {
        format!(
            "resolving {} against {}",
            args.forward.display(),
            args.reverse.display()
        )
    })?;

    let context = ReportContext {
        forward_name: Some(args.forward.display().to_string()),
        reverse_name: Some(args.reverse.display().to_string()),
        ..Default::default()
    };
    write_rbh_output(&outcome.rbh, args.options.out.as_ref(), &config.output, &context)
        .context("writing RBH table")?;

    let summary = generate_summary(&outcome.forward, &outcome.reverse, &outcome.rbh, None);
    for line in summary.lines() {
        log::info!("{}", line);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            init_logger(args.options.verbose);
            run(args)?;
        }
        Commands::Resolve(args) => {
            init_logger(args.options.verbose);
            resolve(args)?;
        }
    }
    Ok(())
}
