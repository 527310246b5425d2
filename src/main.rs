use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spacetraveling::models::{PostDetail, PostSummary};
use spacetraveling::{dump, fetcher, static_paths, FeedSession, LoadState, PaginatedFeed, Settings};
use tracing_subscriber;

#[derive(Parser)]
#[command(name = "spacetraveling")]
#[command(about = "Blog listing and post tools over content API responses", long_about = None)]
struct Cli {
    /// Reading speed used for reading time estimates
    #[arg(long, global = true)]
    words_per_minute: Option<u32>,

    /// Locale for publication dates, e.g. pt_BR
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    List {
        #[arg(short, long)]
        file: PathBuf,
        /// Follow up to N next-page links
        #[arg(short, long, default_value_t = 0)]
        more: usize,
        #[arg(long)]
        json: bool,
    },
    Show {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Paths {
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(wpm) = cli.words_per_minute {
        settings.words_per_minute = wpm;
    }
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }

    match cli.command {
        Commands::List { file, more, json } => {
            let mapper = settings.mapper()?;
            let raw = dump::read_feed_response(&file)?;
            let mut session = FeedSession::new(PaginatedFeed::new(mapper.map_response(&raw)));

            if more > 0 {
                let client = fetcher::build_client()?;
                for _ in 0..more {
                    let Some(url) = session.begin_load() else {
                        break;
                    };
                    let outcome = fetcher::fetch_next_page(&client, &url)
                        .await
                        .map(|raw| mapper.map_response(&raw));
                    session.finish_load(outcome);

                    if let LoadState::Failed(message) = session.state() {
                        eprintln!("  ✗ Failed to load more posts: {}", message);
                        break;
                    }
                }
            }

            let posts = session.feed().flattened_results();
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                for post in &posts {
                    print_summary(post);
                }
                if session.feed().has_more() {
                    println!("More posts available, use --more to load them");
                }
            }
        }
        Commands::Show { file, json } => {
            let mapper = settings.mapper()?;
            let raw = dump::read_post_detail(&file)?;
            let post = mapper.map_detail(&raw)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                let date = post.formatted_date(mapper.dates())?;
                print_detail(&post, date.as_deref(), post.reading_time(&settings.estimator()));
            }
        }
        Commands::Paths { file } => {
            let raw = dump::read_paths_response(&file)?;
            for slug in static_paths(&raw) {
                println!("{}", slug);
            }
        }
    }

    Ok(())
}

fn print_summary(post: &PostSummary) {
    let options = textwrap::Options::new(80)
        .initial_indent("  ")
        .subsequent_indent("  ");

    println!("{}", post.title);
    println!("{}", textwrap::fill(&post.subtitle, options));
    println!(
        "  {} · {}\n",
        post.publication_date.as_deref().unwrap_or("unpublished"),
        post.author
    );
}

fn print_detail(post: &PostDetail, date: Option<&str>, minutes: u32) {
    println!("{}", post.title);
    println!(
        "{} · {} · {} min",
        date.unwrap_or("unpublished"),
        post.author,
        minutes
    );
    println!("Banner: {}", post.banner_url);
    println!("\n────────────────────────────────────────\n");

    for block in &post.content {
        if let Some(heading) = &block.heading {
            println!("## {}\n", heading);
        }
        let body = block
            .body
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if !body.is_empty() {
            println!("{}\n", textwrap::fill(&body, 80));
        }
    }
}
