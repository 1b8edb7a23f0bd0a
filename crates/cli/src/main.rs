//! StableShop CLI - drive the persistent cart from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Add a product card to the cart
//! stableshop add --id sku-1 --title "Chair" --price "7 990 ₽" --image chair.png
//!
//! # Add a card without an explicit id (id is derived from the title)
//! stableshop add --title "Desk Lamp" --price 1490 --qty 2
//!
//! # Show the item count, the header badge, or the stored lines
//! stableshop count
//! stableshop badge
//! stableshop show
//!
//! # Drop the stored cart
//! stableshop clear
//! ```
//!
//! The cart is stored under `STABLESHOP_STORE_DIR` (default `.stableshop`);
//! `--store-dir` overrides it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "stableshop")]
#[command(author, version, about = "StableShop cart tools")]
struct Cli {
    /// Directory of the persisted store (overrides `STABLESHOP_STORE_DIR`)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product card to the cart
    Add(AddArgs),
    /// Print the total number of items
    Count,
    /// Print the header badge text (empty when the cart is empty)
    Badge,
    /// Print the stored cart lines as JSON
    Show,
    /// Remove the stored cart
    Clear,
}

/// Raw card attributes, as a click handler would read them.
#[derive(Args)]
pub struct AddArgs {
    /// Explicit product id (`data-id`); derived from the title when absent
    #[arg(long)]
    pub id: Option<String>,

    /// Card title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Displayed price text, e.g. "7 990 ₽"
    #[arg(short, long)]
    pub price: Option<String>,

    /// Slide image sources, in card order
    #[arg(short, long = "image")]
    pub images: Vec<String>,

    /// Index of the currently visible slide
    #[arg(long)]
    pub visible: Option<usize>,

    /// Quantity to add; values below 1 count as 1
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub qty: i64,
}

fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stableshop_storefront=info,stableshop_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let mut config = stableshop_storefront::StorefrontConfig::from_env()?;
    if let Some(dir) = cli.store_dir {
        config.store_dir = dir;
    }

    let mut session = commands::Session::open(&config);
    match cli.command {
        Commands::Add(args) => commands::add(&mut session, &config, &args.to_card(), args.qty),
        Commands::Count => commands::count(&session),
        Commands::Badge => commands::badge(&mut session),
        Commands::Show => commands::show(&session),
        Commands::Clear => commands::clear(&mut session),
    }
}

impl AddArgs {
    fn to_card(&self) -> stableshop_storefront::ProductCard {
        use stableshop_storefront::catalog::Slide;

        let slides = self
            .images
            .iter()
            .enumerate()
            .map(|(idx, src)| Slide {
                src: src.clone(),
                visible: self.visible == Some(idx),
            })
            .collect();

        stableshop_storefront::ProductCard {
            data_id: self.id.clone(),
            title: self.title.clone(),
            price_text: self.price.clone(),
            slides,
        }
    }
}
