use clap::{Parser, ValueEnum};
use rs_genalign::{
    cigar::CigarFormat, config::AlignConfig, scoring::Scoring, task::AlignTask, Alignment,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CigarArg {
    /// M, I, D.
    Standard,
    /// =, X, I, D.
    Extended,
}

impl From<CigarArg> for CigarFormat {
    fn from(arg: CigarArg) -> Self {
        match arg {
            CigarArg::Standard => CigarFormat::Standard,
            CigarArg::Extended => CigarFormat::Extended,
        }
    }
}

/// Align two sequences and print the cost and the start of the alignment.
#[derive(Parser, Debug)]
#[command(name = "rs_genalign", version)]
struct Cli {
    /// First sequence.
    query: String,
    /// Second sequence.
    target: String,

    /// Only fill cells near the main diagonal.
    #[arg(short, long)]
    banded: bool,
    /// Clip both sequences to this many characters.
    #[arg(short = 'n', long)]
    max_length: Option<usize>,
    /// Half-width of the band.
    #[arg(short = 'd', long, default_value_t = 3)]
    band_tolerance: usize,
    #[arg(long, default_value_t = -3, allow_negative_numbers = true)]
    match_bonus: i64,
    #[arg(long, default_value_t = 1)]
    substitution: i64,
    #[arg(long, default_value_t = 5)]
    indel: i64,
    /// Characters of each alignment line to print.
    #[arg(long, default_value_t = 100)]
    display_length: usize,
    /// Print the cost only.
    #[arg(long)]
    distance_only: bool,
    /// Also print the CIGAR string of the full alignment.
    #[arg(long, value_enum)]
    cigar: Option<CigarArg>,
    /// More logging. Repeat for trace output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = AlignConfig {
        mode: cli.banded.into(),
        task: if cli.distance_only {
            AlignTask::Distance
        } else {
            AlignTask::Path
        },
        scoring: Scoring::new(cli.match_bonus, cli.substitution, cli.indel),
        band_tolerance: cli.band_tolerance,
        max_length: cli.max_length.unwrap_or(usize::MAX),
        display_length: cli.display_length,
    };

    let alignment = Alignment::run(config, &cli.query, &cli.target)?;

    println!("cost: {}", alignment.cost);
    if !cli.distance_only {
        println!("{}", alignment.query_display);
        println!("{}", alignment.target_display);
    }
    if let Some(cigar) = cli.cigar.and_then(|format| alignment.cigar(format.into())) {
        println!("cigar: {cigar}");
    }
    Ok(())
}
