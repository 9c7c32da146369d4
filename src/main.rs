use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use qgroup::{ConfigLoader, Group, Linkage, Question, QuestionGrouper, QuestionStatus};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Group near-duplicate questions so they can be answered together
#[derive(Parser, Debug)]
#[command(name = "qgroup", version, about)]
struct Cli {
    /// JSON file holding an array of questions (stdin when omitted)
    input: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Merge cutoff on cosine distance
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Cluster linkage: average, complete or single
    #[arg(short, long)]
    linkage: Option<Linkage>,

    /// Only group questions with this status
    #[arg(short, long, value_enum, default_value_t = StatusFilter::Pending)]
    status: StatusFilter,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatusFilter {
    Pending,
    Escalated,
    Answered,
    All,
}

impl StatusFilter {
    fn matches(self, status: QuestionStatus) -> bool {
        match self {
            StatusFilter::Pending => status == QuestionStatus::Pending,
            StatusFilter::Escalated => status == QuestionStatus::Escalated,
            StatusFilter::Answered => status == QuestionStatus::Answered,
            StatusFilter::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }

    let mut config = ConfigLoader::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(threshold) = cli.threshold {
        config.distance_threshold = threshold;
    }
    if let Some(linkage) = cli.linkage {
        config.linkage = linkage;
    }
    config.validate()?;

    let raw = read_input(cli.input.as_ref())?;
    let questions: Vec<Question> =
        serde_json::from_str(&raw).context("Failed to parse questions JSON")?;

    let selected = select_by_status(questions, cli.status);

    info!(
        questions = selected.len(),
        status = ?cli.status,
        threshold = config.distance_threshold,
        linkage = %config.linkage,
        "grouping questions"
    );

    let start = Instant::now();
    let grouper = QuestionGrouper::from_config(&config);
    let groups = grouper.group(&selected);
    info!(
        groups = groups.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "grouping complete"
    );

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&groups).context("Failed to serialize groups")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&groups)),
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .context(format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read questions from stdin")?;
            Ok(buf)
        }
    }
}

fn select_by_status(questions: Vec<Question>, filter: StatusFilter) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| filter.matches(q.status))
        .collect()
}

fn render_text(groups: &[Group<'_, Question>]) -> String {
    let mut out = String::new();

    for (i, group) in groups.iter().enumerate() {
        out.push_str(&format!("[{}] {} ({})\n", i + 1, group.title, group.count));
        for q in &group.questions {
            out.push_str(&format!(
                "    {}  {:<12} {}\n",
                q.question_id,
                q.display_name(),
                q.message
            ));
        }
    }

    out
}
