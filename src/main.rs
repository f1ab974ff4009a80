// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use corpus_hits::utils::logging::{format_info, format_success, format_warning};
use corpus_hits::{
    Config, CorpusResultStream, CorpusSearcher, KnownPhrases, SearchOptions, Validator, compile,
};
use futures::TryStreamExt;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "corpus-hits")]
#[command(version = "0.1.0")]
#[command(about = "Query a BlackLab corpus server and rebuild hit text", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled query pattern
    Compile { query: String },

    /// Count hits without fetching them
    Count {
        query: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Fetch every hit and print the reconstructed results as JSON
    Search {
        query: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Words of context on each side of the match
        #[arg(short, long)]
        window: Option<usize>,

        /// Verb and noun lemmas instead of surface words
        #[arg(long)]
        lemma: bool,

        /// Leave the match itself out of complete_match
        #[arg(long)]
        exclude_match: bool,

        #[arg(long)]
        no_left: bool,

        #[arg(long)]
        no_right: bool,

        /// Text removed from every reconstructed string, repeatable
        #[arg(long = "search-term", value_name = "TERM")]
        search_terms: Vec<String>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Print one whitespace-separated token list per hit
    Tokens {
        query: String,

        /// Search these documents one after another, repeatable
        #[arg(long = "document-id", value_name = "ID")]
        document_ids: Vec<String>,

        #[arg(short, long)]
        window: Option<usize>,

        #[arg(long)]
        lemma: bool,

        /// File with one two-word phrase per line
        #[arg(long, value_name = "FILE")]
        phrases: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    document_id: Option<String>,

    #[arg(long, requires = "max_year")]
    min_year: Option<String>,

    #[arg(long, requires = "min_year")]
    max_year: Option<String>,
}

impl FilterArgs {
    fn apply(self, mut options: SearchOptions) -> Result<SearchOptions> {
        for year in [&self.min_year, &self.max_year].into_iter().flatten() {
            Validator::validate_year(year)?;
        }
        options.document_id = self.document_id;
        options.min_year = self.min_year;
        options.max_year = self.max_year;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    corpus_hits::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Compile { query } => {
            println!("{}", compile(&query));
        }
        Commands::Count { query, filter } => {
            cmd_count(&config, &query, filter).await?;
        }
        Commands::Search {
            query,
            filter,
            window,
            lemma,
            exclude_match,
            no_left,
            no_right,
            search_terms,
            pretty,
        } => {
            let options = SearchOptions::default()
                .with_window(window.unwrap_or(config.search.window))
                .with_lemma(lemma)
                .with_include_match(!exclude_match)
                .with_sides(!no_left, !no_right);
            let options = if search_terms.is_empty() {
                options
            } else {
                options.with_search_terms(search_terms)
            };
            let options = filter.apply(options)?;

            cmd_search(&config, &query, &options, pretty).await?;
        }
        Commands::Tokens {
            query,
            document_ids,
            window,
            lemma,
            phrases,
        } => {
            cmd_tokens(
                &config,
                &query,
                document_ids,
                window.unwrap_or(config.search.window),
                lemma,
                phrases,
            )
            .await?;
        }
    }

    Ok(())
}

async fn cmd_count(config: &Config, query: &str, filter: FilterArgs) -> Result<()> {
    let options = filter.apply(SearchOptions::default())?;
    let searcher = CorpusSearcher::from_config(config).context("Failed to create HTTP client")?;

    let total = searcher
        .count(query, &options)
        .await
        .context("Counting request failed")?;

    println!("{}", total);
    eprintln!("{}", format_info(&format!("pattern {}", compile(query))));
    Ok(())
}

async fn cmd_search(
    config: &Config,
    query: &str,
    options: &SearchOptions,
    pretty: bool,
) -> Result<()> {
    if Validator::validate_context(options.window, options.include_match).is_err() {
        eprintln!(
            "{}",
            format_warning("match excluded with a zero window, results will be empty")
        );
    }

    let searcher = CorpusSearcher::from_config(config).context("Failed to create HTTP client")?;
    let results = searcher
        .search(query, options)
        .await
        .context("Search failed")?;

    let json = if pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{}", json);

    eprintln!(
        "{}",
        format_success(&format!("{} results for {}", results.len(), compile(query)))
    );
    Ok(())
}

async fn cmd_tokens(
    config: &Config,
    query: &str,
    document_ids: Vec<String>,
    window: usize,
    lemma: bool,
    phrases: Option<PathBuf>,
) -> Result<()> {
    let searcher = CorpusSearcher::from_config(config).context("Failed to create HTTP client")?;
    let mut corpus = CorpusResultStream::new(searcher, query)
        .with_window(window)
        .with_lemma(lemma);

    if !document_ids.is_empty() {
        corpus = corpus.with_document_ids(document_ids);
    }

    if let Some(path) = phrases {
        let known = KnownPhrases::from_file(&path)
            .with_context(|| format!("Failed to read phrases from {}", path.display()))?;
        info!("Loaded {} phrases", known.len());
        corpus = corpus.with_segmenter(known);
    }

    let stream = corpus.stream();
    futures::pin_mut!(stream);

    let mut lines = 0usize;
    while let Some(tokens) = stream.try_next().await? {
        println!("{}", tokens.join(" "));
        lines += 1;
    }

    eprintln!("{}", format_success(&format!("{} token lists", lines)));
    Ok(())
}
