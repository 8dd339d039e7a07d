//! Build the gallery manifest from a saved tree listing.
//!
//! ```text
//! curl -s "https://api.github.com/repos/<owner>/<repo>/git/trees/main?recursive=1" > tree.json
//! gallery-manifest tree.json -o gallery.json
//! ```

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use ghss_site::config::SiteConfig;
use ghss_site::core::{ConfigError, FetchError, decode_tree, gallery_manifest};
use ghss_site::utils::logger;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "gallery-manifest", version)]
#[command(about = "Write the gallery image manifest from a saved tree listing")]
struct Cli {
    /// Tree listing JSON (`-` reads stdin)
    input: PathBuf,
    /// Output file (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Section folder holding the category folders
    #[arg(long, default_value = "Gallery")]
    section: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to encode manifest: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write manifest: {0}")]
    Write(#[from] io::Error),
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let mut text = String::new();
    let result = if path.as_os_str() == "-" {
        io::stdin().read_to_string(&mut text).map(|_| ())
    } else {
        std::fs::read_to_string(path).map(|t| text = t)
    };
    result.map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text)
}

fn run(cli: &Cli) -> Result<usize, CliError> {
    let config = SiteConfig::load()?;
    let entries = decode_tree(&read_input(&cli.input)?)?;
    let manifest = gallery_manifest(&entries, &cli.section, &config.content)?;
    let json = serde_json::to_string_pretty(&manifest)?;

    match &cli.output {
        Some(path) => std::fs::write(path, json + "\n")?,
        None => writeln!(io::stdout().lock(), "{}", json)?,
    }
    Ok(manifest.len())
}

fn main() {
    logger::init(log::LevelFilter::Info);
    let cli = Cli::parse();

    let exit = match run(&cli) {
        Ok(count) => {
            log::info!("wrote {} gallery entries", count);
            0
        }
        Err(err) => {
            log::error!("{}", err);
            1
        }
    };
    std::process::exit(exit);
}
