use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use github_language_stats::{
    ConsoleReporter, CsvPersister, DEFAULT_UNSPECIFIED_CSV_PATH, GITHUB_SEARCH_ENDPOINT,
    LanguageCrawler, RestSearchFetcher, SequentialCrawler, StdResult, report_crawl,
};

/// Command line arguments for the GitHub language statistics
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Search term, prompted for on standard input when omitted
    #[arg(short, long, env = "SEARCH_TERM")]
    search_term: Option<String>,

    /// Repository search endpoint
    #[arg(long, env = "GITHUB_SEARCH_ENDPOINT", default_value = GITHUB_SEARCH_ENDPOINT)]
    endpoint: String,

    /// CSV file receiving the repositories without a declared language
    #[arg(short, long, default_value = DEFAULT_UNSPECIFIED_CSV_PATH)]
    output: PathBuf,

    /// Hide the progress indicator
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");
    let search_term = match &args.search_term {
        Some(search_term) => search_term.to_owned(),
        None => prompt_search_term()?,
    };
    info!("Starting language crawl for '{search_term}'");

    let crawler = build_sequential_crawler(&args)?;
    let report = crawler.crawl(&search_term).await?;
    report_crawl(&ConsoleReporter::stdout(), &report)?;
    info!("Crawling completed");

    Ok(())
}

fn prompt_search_term() -> StdResult<String> {
    print!("Enter the search term: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn build_progress_bar(args: &Args) -> StdResult<ProgressBar> {
    if args.no_progress {
        return Ok(ProgressBar::hidden());
    }
    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::with_template(
        "{spinner} Fetching repositories: {pos} repos [{elapsed}]",
    )?);
    progress.enable_steady_tick(Duration::from_millis(100));

    Ok(progress)
}

fn build_sequential_crawler(args: &Args) -> StdResult<SequentialCrawler> {
    let fetcher = Arc::new(RestSearchFetcher::try_new(&args.endpoint)?);
    let persister = Arc::new(CsvPersister::new(&args.output));

    Ok(SequentialCrawler::new(fetcher, persister).with_progress_bar(build_progress_bar(args)?))
}
