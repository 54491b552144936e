use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use shelfsearch::{
    Book, CatalogApi, FacetFilter, HttpCatalogClient, InteractiveCatalog, logging,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "shelfsearch",
    version,
    about = "Terminal client for a library-catalog search service",
    long_about = None
)]
struct Cli {
    /// Free-text semantic search query
    query: Option<String>,

    /// Catalog service base URL
    #[arg(long, env = "SHELFSEARCH_BASE_URL", default_value = "http://127.0.0.1:31001")]
    base_url: String,

    /// Account email, used for suggestions and reading history
    #[arg(long, env = "SHELFSEARCH_EMAIL")]
    email: Option<String>,

    /// Filter by author (faceted search)
    #[arg(short, long)]
    author: Option<String>,

    /// Filter by title (faceted search)
    #[arg(short, long)]
    title: Option<String>,

    /// Filter by genre (faceted search)
    #[arg(short, long)]
    genre: Option<String>,

    /// Filter by ISBN (faceted search)
    #[arg(long)]
    isbn: Option<String>,

    /// Filter by publisher (faceted search)
    #[arg(short, long)]
    publisher: Option<String>,

    /// List popular titles
    #[arg(long)]
    popular: bool,

    /// Fetch personalized suggestions (requires --email)
    #[arg(long)]
    suggest: bool,

    /// Register an account with the given username (requires --email)
    #[arg(long, value_name = "USERNAME")]
    register: Option<String>,

    /// Interactive mode (requires --email)
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn facet_filter(&self) -> Option<FacetFilter> {
        if self.author.is_none()
            && self.title.is_none()
            && self.genre.is_none()
            && self.isbn.is_none()
            && self.publisher.is_none()
        {
            return None;
        }
        Some(FacetFilter {
            author: self.author.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            genre: self.genre.clone().unwrap_or_default(),
            isbn: self.isbn.clone().unwrap_or_default(),
            publisher: self.publisher.clone().unwrap_or_default(),
        })
    }

    fn require_email(&self) -> Result<&str> {
        match &self.email {
            Some(email) => Ok(email),
            None => bail!("this operation needs an account; pass --email or set SHELFSEARCH_EMAIL"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::new(cli.base_url.clone()));

    if cli.interactive {
        let email = cli.require_email()?.to_string();
        return InteractiveCatalog::new(api, email).run();
    }

    if let Some(username) = &cli.register {
        let email = cli.require_email()?;
        api.register(email, username)?;
        println!("Registered {email} as {username}");
        return Ok(());
    }

    if cli.suggest {
        let email = cli.require_email()?;
        let books = api.fetch_suggestions(email)?;
        return print_books(&books, cli.format);
    }

    if cli.popular {
        let books = api.fetch_popular()?;
        return print_books(&books, cli.format);
    }

    if let Some(filter) = cli.facet_filter() {
        let books = api.fetch_faceted(&filter)?;
        return print_books(&books, cli.format);
    }

    if let Some(query) = &cli.query {
        let query = query.trim();
        if query.is_empty() {
            bail!("query must not be blank");
        }
        let books = api.fetch_semantic(query)?;
        // Same side effect the interactive session performs; best-effort.
        if let Some(email) = &cli.email {
            if let Err(e) = api.record_search(email, &[query.to_string()]) {
                tracing::warn!(error = %e, "failed to record search history");
            }
        }
        return print_books(&books, cli.format);
    }

    bail!("nothing to do; pass a query, a facet flag, --popular, --suggest, or -i (see --help)")
}

fn print_books(books: &[Book], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(books)?);
        }
        OutputFormat::Text => {
            if books.is_empty() {
                println!("No results found.");
                return Ok(());
            }
            for (i, book) in books.iter().enumerate() {
                let mut line = format!("{:2}. {}", i + 1, book.title.bold());
                if !book.author.is_empty() {
                    line.push_str(&format!(" by {}", book.author_line()));
                }
                if !book.genre.is_empty() {
                    line.push_str(&format!(" [{}]", book.genre.cyan()));
                }
                line.push_str(&format!(" score {}", format!("{:.2}", book.score).yellow()));
                println!("{line}");
                if !book.summary.is_empty() {
                    println!("    {}", truncate(&book.summary, 120).dimmed());
                }
            }
        }
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= max_chars {
        text
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
