use clap::Parser;
use jiff::civil::Date;
use ledgerview::{App, AppConfig, JsonFileSource, OverviewLoader, init_logging, report};
use ledgerview_core::TransactionQuery;
use ledgerview_core::model::StatementSource;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ledgerview")]
#[command(about = "A terminal dashboard for categorized spending")]
struct Args {
    /// Transaction listing to read (JSON)
    input: PathBuf,

    /// Path to the data directory (default: ~/.ledgerview/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the overview as text and exit
    #[arg(long)]
    summary: bool,

    /// Write the overview as JSON to this path and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Assign categories from descriptions instead of using the stored ones
    #[arg(long)]
    categorize: bool,

    /// Only include transactions on or after this date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<Date>,

    /// Only include transactions on or before this date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<Date>,

    /// Only include transactions in this category
    #[arg(long)]
    category: Option<String>,

    /// Only include transactions from this statement source (apple_card, boa_credit)
    #[arg(long)]
    source: Option<StatementSource>,

    /// Maximum number of transactions to include, newest first
    #[arg(long)]
    limit: Option<usize>,
}

impl Args {
    fn query(&self, config: &AppConfig) -> TransactionQuery {
        let mut query = TransactionQuery::new().limit(self.limit.unwrap_or(config.limit));
        if let Some(date) = self.start_date {
            query = query.start_date(date);
        }
        if let Some(date) = self.end_date {
            query = query.end_date(date);
        }
        if let Some(category) = &self.category {
            query = query.category(category.clone());
        }
        if let Some(source) = self.source {
            query = query.source(source);
        }
        query
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ledgerview")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = AppConfig::load(&data_dir)?;
    let mut loader = OverviewLoader::new(JsonFileSource::new(&args.input), args.query(&config));
    if args.categorize {
        loader = loader.with_categorizer(config.categorizer());
    }

    if args.summary || args.export.is_some() {
        let snapshot = loader.load()?;
        if let Some(path) = &args.export {
            report::export_json(&snapshot.overview, path)?;
        }
        if args.summary {
            print!("{}", report::render_text(&snapshot.overview));
        }
        return Ok(());
    }

    let mut app = App::new(loader);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    Ok(())
}
