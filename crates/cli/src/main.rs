//! NEDGE CLI - manage saved collections and shape catalog data.
//!
//! # Usage
//!
//! ```bash
//! # Bookmark a shoot
//! nedge bookmarks add --title "Spring Drop" --stylist Ana
//!
//! # Follow a stylist
//! nedge following add --name Jane --link https://jane.example
//!
//! # Save a garment as seen on a shoot page
//! nedge wardrobe add --id 5 --name Coat --brand Acne --type outerwear --page /shoots/spring-drop
//!
//! # Flatten a catalog export
//! nedge catalog shoots --input shoots.json
//! ```
//!
//! # Commands
//!
//! - `bookmarks` - Add, remove and list bookmarked shoots
//! - `following` - Add, remove and list followed stylists
//! - `wardrobe` - Add, remove and list wardrobe items
//! - `catalog` - Flatten catalog exports and save from them
//!
//! Listings are printed to stdout as JSON; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nedge_core::{CollectionStore, GarmentId, WardrobeItem};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nedge_cli::commands::{self, bookmarks, catalog, following, wardrobe};
use nedge_cli::config::CliConfig;
use nedge_cli::storage;

#[derive(Parser)]
#[command(name = "nedge")]
#[command(author, version, about = "NEDGE collections and catalog tools")]
struct Cli {
    /// Directory holding saved collections (overrides `NEDGE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep collections in memory only; nothing is read or written
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage bookmarked shoots
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Manage followed stylists
    Following {
        #[command(subcommand)]
        action: FollowingAction,
    },
    /// Manage wardrobe items
    Wardrobe {
        #[command(subcommand)]
        action: WardrobeAction,
    },
    /// Work with catalog exports
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// List bookmarked shoots, newest first
    List,
    /// Bookmark a shoot
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        stylist: String,

        /// Extra shoot field as `key=value` (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },
    /// Remove a bookmark
    Remove {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        stylist: String,
    },
}

#[derive(Subcommand)]
enum FollowingAction {
    /// List followed stylists, newest first
    List,
    /// Follow a stylist
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        link: Option<String>,
    },
    /// Unfollow a stylist
    Remove {
        #[arg(short, long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum WardrobeAction {
    /// List wardrobe items, newest first
    List,
    /// Save a garment
    Add {
        #[arg(long)]
        id: GarmentId,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        brand: String,

        /// Garment type (e.g. `outerwear`)
        #[arg(short = 't', long = "type")]
        kind: String,

        /// Page path the garment was seen on
        #[arg(short, long)]
        page: String,
    },
    /// Remove a garment from every page it was saved from
    Remove {
        #[arg(long)]
        id: GarmentId,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print shoots as flat view models
    Shoots {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Print the stylist directory
    Stylists {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Print the brand directory
    Brands {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Bookmark a shoot from the catalog
    Bookmark {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        slug: String,
    },
    /// Follow the stylist of a shoot from the catalog
    Follow {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        slug: String,
    },
    /// Save a garment from a shoot in the catalog
    Save {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        slug: String,

        #[arg(short, long)]
        garment: GarmentId,
    },
}

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nedge_cli=info,nedge_core=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_overrides(cli.data_dir, cli.ephemeral);
    tracing::debug!(?config, "Loaded configuration");

    let mut store = CollectionStore::hydrate(storage::open(&config));

    let output = match cli.command {
        Commands::Bookmarks { action } => match action {
            BookmarkAction::List => Some(commands::render(bookmarks::list(&store))?),
            BookmarkAction::Add {
                title,
                stylist,
                fields,
            } => {
                bookmarks::add(&mut store, &title, &stylist, &fields)?;
                None
            }
            BookmarkAction::Remove { title, stylist } => {
                bookmarks::remove(&mut store, &title, &stylist);
                None
            }
        },
        Commands::Following { action } => match action {
            FollowingAction::List => Some(commands::render(following::list(&store))?),
            FollowingAction::Add { name, link } => {
                following::add(&mut store, &name, link);
                None
            }
            FollowingAction::Remove { name } => {
                following::remove(&mut store, &name);
                None
            }
        },
        Commands::Wardrobe { action } => match action {
            WardrobeAction::List => Some(commands::render(wardrobe::list(&store))?),
            WardrobeAction::Add {
                id,
                name,
                brand,
                kind,
                page,
            } => {
                wardrobe::add(&mut store, WardrobeItem::new(id, name, brand, kind), &page);
                None
            }
            WardrobeAction::Remove { id } => {
                wardrobe::remove(&mut store, id);
                None
            }
        },
        Commands::Catalog { action } => match action {
            CatalogAction::Shoots { input } => {
                Some(commands::render(&catalog::load(&input)?)?)
            }
            CatalogAction::Stylists { input } => {
                let shoots = catalog::load(&input)?;
                Some(commands::render(&nedge_core::catalog::collect_stylists(&shoots))?)
            }
            CatalogAction::Brands { input } => {
                let shoots = catalog::load(&input)?;
                Some(commands::render(&nedge_core::catalog::collect_brands(&shoots))?)
            }
            CatalogAction::Bookmark { input, slug } => {
                catalog::bookmark(&mut store, &catalog::load(&input)?, &slug)?;
                None
            }
            CatalogAction::Follow { input, slug } => {
                catalog::follow(&mut store, &catalog::load(&input)?, &slug)?;
                None
            }
            CatalogAction::Save {
                input,
                slug,
                garment,
            } => {
                catalog::save(&mut store, &catalog::load(&input)?, &slug, garment)?;
                None
            }
        },
    };

    if let Some(output) = output {
        #[allow(clippy::print_stdout)]
        {
            println!("{output}");
        }
    }

    Ok(())
}
