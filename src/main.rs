use clap::Parser;
use lectern::core::config::{self, CliOverrides, LecternConfig, TransitionStyle};
use lectern::core::deck::Deck;
use lectern::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process;

#[derive(Parser)]
#[command(name = "lectern", version, about = "Keyboard-driven slide presenter for the terminal")]
struct Args {
    /// Markdown deck file, or the name of a built-in deck
    deck: Option<String>,

    /// Start in fullscreen
    #[arg(short, long)]
    fullscreen: bool,

    /// Slide transition style
    #[arg(short, long, value_enum)]
    transition: Option<TransitionStyle>,

    /// Print the deck's slide titles and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the presenter
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("lectern.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}; using defaults");
        log::warn!("Config load failed, using defaults: {}", e);
        LecternConfig::default()
    });
    let cli = CliOverrides {
        deck: args.deck,
        fullscreen: args.fullscreen,
        transition: args.transition,
    };
    let resolved = config::resolve(&file_config, &cli);

    let deck = match Deck::open(&resolved.deck) {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("lectern: {e}");
            process::exit(1);
        }
    };

    if args.list {
        for (i, slide) in deck.slides().iter().enumerate() {
            println!("{:02}  {}", i + 1, slide.title);
        }
        return Ok(());
    }

    log::info!(
        "Lectern starting: deck '{}', {} slides, transition {:?}",
        resolved.deck,
        deck.len(),
        resolved.transition_style
    );

    tui::run(resolved, deck)
}
