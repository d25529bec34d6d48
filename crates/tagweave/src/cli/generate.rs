//! The `tagweave generate` command.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use tagweave_core::template::OutputFormat as CoreOutputFormat;
use tagweave_core::{build_library, Config, SeedPolicy};

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory of per-image label files (*.txt)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to wildcards_<YYYYMMDD>.yaml in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum classifier confidence to keep a label
    #[arg(short, long)]
    pub threshold: Option<f32>,

    /// Minimum tag-set size for the greedy synthesis pass
    #[arg(short = 'm', long = "min-set-size")]
    pub min_set_size: Option<usize>,

    /// Maximum tag-set size
    #[arg(short = 'x', long = "max-set-size")]
    pub max_set_size: Option<usize>,

    /// Minimum Jaccard similarity for a label to join a growing set
    #[arg(short = 's', long)]
    pub similarity: Option<f64>,

    /// Extra labels to exclude (repeatable, or comma-separated)
    #[arg(long = "exclude", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// How the seed label of each set is chosen
    #[arg(long, value_enum)]
    pub seed_policy: Option<SeedPolicyArg>,

    /// RNG seed for the random seed policy
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "wildcard")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned wildcard text
    Wildcard,
    /// JSON rendering of the same structure
    Json,
}

/// Seed policy choices mirrored from the core.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SeedPolicyArg {
    /// Seed on the highest-frequency unassigned label
    Frequency,
    /// Seed on a random unassigned label (reproducible via --rng-seed)
    Random,
}

impl From<SeedPolicyArg> for SeedPolicy {
    fn from(arg: SeedPolicyArg) -> Self {
        match arg {
            SeedPolicyArg::Frequency => SeedPolicy::Frequency,
            SeedPolicyArg::Random => SeedPolicy::Random,
        }
    }
}

/// Execute the generate command.
pub fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!(
            "Input directory does not exist: {:?}\n\n  Hint: Check the path and try again.",
            args.input
        );
    }

    let config = apply_overrides(Config::load()?, &args);
    config.validate()?;

    let library = build_library(&config, &args.input)?;

    let format = match args.format {
        OutputFormat::Wildcard => CoreOutputFormat::Wildcard,
        OutputFormat::Json => CoreOutputFormat::Json,
    };
    let rendered = library.render(format, args.pretty || config.output.pretty)?;

    // Rendered fully in memory first: a failed run never leaves a partial file.
    let output = args.output.clone().unwrap_or_else(default_output_path);
    std::fs::write(&output, rendered)?;

    tracing::info!(
        "Wrote {} section(s) to {}",
        library.sections().len(),
        output.display(),
    );
    println!("Template library written to {}", output.display());

    Ok(())
}

/// Layer CLI flags over the loaded configuration.
fn apply_overrides(mut config: Config, args: &GenerateArgs) -> Config {
    if let Some(threshold) = args.threshold {
        config.ingest.threshold = threshold;
    }
    if let Some(min) = args.min_set_size {
        config.synthesis.min_group_size = min;
    }
    if let Some(max) = args.max_set_size {
        config.synthesis.max_group_size = max;
    }
    if let Some(similarity) = args.similarity {
        config.synthesis.similarity_threshold = similarity;
    }
    if let Some(policy) = args.seed_policy {
        config.synthesis.seed_policy = policy.into();
    }
    if let Some(seed) = args.rng_seed {
        config.synthesis.rng_seed = seed;
    }
    for label in &args.exclude {
        let label = label.trim().to_string();
        if !label.is_empty() && !config.ingest.exclude_labels.contains(&label) {
            config.ingest.exclude_labels.push(label);
        }
    }
    config
}

/// Dated default output filename, matching the library's wildcard flavor.
fn default_output_path() -> PathBuf {
    let today = chrono::Local::now().format("%Y%m%d");
    PathBuf::from(format!("wildcards_{today}.yaml"))
}
