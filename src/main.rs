use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use showfinder::{
    ClickEvent, Page, ProgressEvent, SearchSubmit, Settings, ShowFinder, ShowFinderError,
    ShowProvider, SummaryMode, TVMAZE_API_URL, TvMazeProvider,
};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Search TV shows on TVMaze and list their episodes
#[derive(Debug, Parser)]
#[command(name = "showfinder", version, about)]
struct Cli {
    /// Base URL of the TVMaze API
    #[arg(long, value_name = "URL", default_value = TVMAZE_API_URL)]
    api_url: String,

    /// HTML-escape show summaries instead of inserting them as markup
    #[arg(long)]
    escape_summaries: bool,

    /// Print the looked up records as JSON instead of rendering them
    #[arg(long)]
    json: bool,

    /// Write the rendered page to this file after every search or episode listing
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search and browse episodes interactively (default)
    Interactive,
    /// Search for shows matching a term
    Search {
        /// Free-text search term
        term: String,
    },
    /// List the episodes of a show
    Episodes {
        /// TVMaze show id
        show_id: u64,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    ShowFinder(#[from] ShowFinderError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::SearchStarted { term } => {
            println!("Searching TVMaze for '{}'...", term);
        }
        ProgressEvent::ShowsRendered { count } => {
            if count == 0 {
                println!("No shows found.\n");
            } else {
                println!("Found {} show(s)\n", count);
            }
        }
        ProgressEvent::EpisodesRequested { show_id } => {
            println!("\nRetrieving episodes for show {}...", show_id);
        }
        ProgressEvent::EpisodesRendered { count, .. } => {
            println!("Found {} episode(s)\n", count);
        }
        ProgressEvent::StaleResponse { pipeline } => {
            println!("Skipped an outdated {:?} response.", pipeline);
        }
    }
}

fn print_shows(page: &Page) {
    for (index, card) in page.shows_list.cards().iter().enumerate() {
        let show = card.show();
        println!("[{}] {} (id {})", index + 1, show.name, show.id);
        println!("  Image: {}", show.image);
        if let Some(summary) = &show.summary {
            let text = nanohtml2text::html2text(summary);
            let text = text.trim();
            if !text.is_empty() {
                println!("  {}", text.replace('\n', "\n  "));
            }
        }
        println!();
    }
}

fn print_episodes(page: &Page) {
    if page.episodes_area.is_hidden() {
        return;
    }
    println!("=== Episodes ===");
    for entry in page.episodes_area.entries() {
        println!("  {}", entry);
    }
    println!();
}

fn write_html(path: Option<&Path>, page: &Page, term: &str) -> Result<(), CliError> {
    if let Some(path) = path {
        std::fs::write(path, page.to_html(term)).map_err(ShowFinderError::from)?;
        println!("Page written to {}", path.display());
    }
    Ok(())
}

fn interactive(finder: &ShowFinder<TvMazeProvider>, html: Option<&Path>) -> Result<(), CliError> {
    loop {
        let term: String = Input::new()
            .with_prompt("Search for a show")
            .allow_empty(true)
            .interact_text()?;

        let submit = SearchSubmit::new(term);
        if let Err(e) = finder.submit_search(&submit, handle_progress_event) {
            eprintln!("Error: {}\n", e);
            continue;
        }
        print_shows(&finder.page());
        write_html(html, &finder.page(), &submit.term)?;

        loop {
            let mut items: Vec<String> = finder
                .page()
                .shows_list
                .cards()
                .iter()
                .map(|card| format!("Episodes: {}", card.show().name))
                .collect();
            let card_count = items.len();
            items.push("New search".to_string());
            items.push("Quit".to_string());

            let selection = Select::new()
                .with_prompt("Choose")
                .items(&items)
                .default(0)
                .interact_opt()?;

            match selection {
                Some(index) if index < card_count => {
                    let click = ClickEvent::episodes_button(index);
                    match finder.click(&click, handle_progress_event) {
                        Ok(_) => {
                            print_episodes(&finder.page());
                            write_html(html, &finder.page(), &submit.term)?;
                        }
                        Err(e) => eprintln!("Error: {}\n", e),
                    }
                }
                Some(index) if index == card_count => break,
                Some(_) => return Ok(()),
                None => break,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings {
        api_base_url: cli.api_url,
        summary_mode: if cli.escape_summaries {
            SummaryMode::Escaped
        } else {
            SummaryMode::Raw
        },
    };
    let finder = ShowFinder::from_settings(&settings);
    let html = cli.html.as_deref();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive(&finder, html),
        Command::Search { term } if cli.json => {
            let shows = finder
                .provider()
                .search_shows(&term)
                .map_err(ShowFinderError::from)?;
            println!("{}", serde_json::to_string_pretty(&shows)?);
            Ok(())
        }
        Command::Search { term } => {
            finder.submit_search(&SearchSubmit::new(term.as_str()), handle_progress_event)?;
            print_shows(&finder.page());
            write_html(html, &finder.page(), &term)
        }
        Command::Episodes { show_id } if cli.json => {
            let episodes = finder
                .provider()
                .fetch_episodes(show_id)
                .map_err(ShowFinderError::from)?;
            println!("{}", serde_json::to_string_pretty(&episodes)?);
            Ok(())
        }
        Command::Episodes { show_id } => {
            finder.show_episodes(show_id, handle_progress_event)?;
            print_episodes(&finder.page());
            write_html(html, &finder.page(), "")
        }
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
