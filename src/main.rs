use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use traffic_rank::config::DEFAULT_TOP_N;
use traffic_rank::render::{self, OutputFormat};
use traffic_rank::{MergeMode, PipelineConfig, Result, pipeline, source};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "traffic-rank")]
#[command(about = "Rank devices by aggregated access-log traffic", long_about = None)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a log by device and print the top devices.
    Report {
        /// Log file, or `-` for stdin.
        #[arg(long, default_value = source::STDIN_PATH)]
        log: String,

        #[arg(long, env = "TRAFFIC_RANK_TOP", default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Threads used to parse and aggregate.
        #[arg(long, env = "TRAFFIC_RANK_WORKERS", default_value_t = 1)]
        workers: usize,

        #[arg(long, env = "TRAFFIC_RANK_MERGE_MODE", value_enum, default_value_t = MergeMode::Sum)]
        merge_mode: MergeMode,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the result here instead of stdout.
        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Report {
            log,
            top,
            workers,
            merge_mode,
            format,
            out,
        } => {
            let config = PipelineConfig::default()
                .with_top_n(top)
                .with_workers(workers)
                .with_merge_mode(merge_mode);

            // 1) Read lines.
            let lines = source::read_lines(&log)?;
            tracing::debug!(path = %log, lines = lines.len(), "read log");

            // 2) Parse, aggregate, rank. Any malformed line aborts the run.
            let result = pipeline::run(lines, &config)?;

            // 3) Render.
            let rendered = match format {
                OutputFormat::Text => render::render_text(&result.entries),
                OutputFormat::Json => render::render_json(&result, top)?,
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("write report {}", path))?;
                    tracing::info!(path = %path, entries = result.entries.len(), "wrote report");
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}
