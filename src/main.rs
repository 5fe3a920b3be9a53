//! ScriptForge - game-scripting tutorial site with a Unity snippet
//! generator and AI helper
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use scriptforge_core::form::{self, RawConfigInput};
use scriptforge_core::generator;
use scriptforge_core::prelude::*;
use scriptforge_server::{pages, routes, ServerConfig};

/// ScriptForge - tutorial site server and Unity snippet generator
#[derive(Parser, Debug)]
#[command(name = "scriptforge")]
#[command(
    about = "Game-scripting tutorial site with a Unity snippet generator and AI helper",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the site server (the default)
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Directory of static assets
        #[arg(long, value_name = "DIR")]
        public_dir: Option<PathBuf>,
    },

    /// Render a Unity movement script from configurator options
    Generate {
        /// Class name for the generated MonoBehaviour
        #[arg(long, default_value = "")]
        class_name: String,

        /// Scene dimension: 2d or 3d
        #[arg(long, default_value = "2d")]
        dimension: String,

        /// Movement style: rigidbody or transform
        #[arg(long, default_value = "rigidbody")]
        movement: String,

        /// Append a jump block (Rigidbody movement only)
        #[arg(long)]
        jump: bool,
    },

    /// Bake the site pages into the public directory
    Pages {
        /// Directory to write the pages into
        #[arg(long, value_name = "DIR")]
        public_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::server(e.to_string()))?;

    // Initialize logging (to stderr; generate keeps stdout for the snippet)
    scriptforge_core::logging::init()?;

    let args = Args::parse();
    let result = match args.command {
        None => run_serve(None, None).await,
        Some(Command::Serve { port, public_dir }) => run_serve(port, public_dir).await,
        Some(Command::Generate {
            class_name,
            dimension,
            movement,
            jump,
        }) => run_generate(class_name, dimension, movement, jump),
        Some(Command::Pages { public_dir }) => run_pages(public_dir),
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

async fn run_serve(port: Option<u16>, public_dir: Option<PathBuf>) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(dir) = public_dir {
        config.public_dir = dir;
    }
    routes::serve(config).await
}

fn run_generate(class_name: String, dimension: String, movement: String, jump: bool) -> Result<()> {
    let input = RawConfigInput {
        class_name,
        dimension,
        movement_type: movement,
        enable_jump: jump,
    };
    let config = form::extract(&input);
    println!("{}", generator::render(&config));
    Ok(())
}

fn run_pages(public_dir: Option<PathBuf>) -> Result<()> {
    let dir = public_dir.unwrap_or_else(|| ServerConfig::default().public_dir);
    let written = pages::bake_pages(&dir)?;
    for path in &written {
        println!("wrote {}", path.display());
    }
    Ok(())
}
