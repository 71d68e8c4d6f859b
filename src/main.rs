use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use opgrid::config::GridConfig;
use opgrid::dataset::{Package, open_package_or_bundled};
use opgrid::html::{render_document, render_grid};
use opgrid::listing::{format_list, format_list_json, format_options, format_options_json};
use opgrid::logging::{self, LoggingConfig};
use opgrid::state::GridState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse the operator icon catalog", long_about = None)]
struct Cli {
    /// Data package directory or .zip archive (default: bundled package)
    #[arg(long, value_name = "DIR|ZIP", global = true)]
    dataset: Option<Utf8PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the operators visible for a search or filter
    List {
        #[command(flatten)]
        query: QueryArgs,
        /// Print a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Print the filter dropdown options
    Options {
        /// Print JSON instead of an indented list
        #[arg(long)]
        json: bool,
    },
    /// Render the grid as HTML
    Render {
        #[command(flatten)]
        query: QueryArgs,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
        /// Emit a complete HTML document instead of a fragment
        #[arg(long)]
        document: bool,
    },
    /// Open the interactive grid window
    #[cfg(feature = "egui")]
    Gui,
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Case-insensitive substring of the operator name
    #[arg(short, long, conflicts_with = "filter")]
    search: Option<String>,
    /// Role or unit to filter by ("None" shows everything)
    #[arg(short, long)]
    filter: Option<String>,
}

impl QueryArgs {
    fn apply(&self, package: &Package) -> GridState {
        GridState::from_query(
            &package.catalog,
            self.search.as_deref(),
            self.filter.as_deref(),
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&LoggingConfig { debug: cli.debug })?;
    let package = open_package_or_bundled(cli.dataset.as_ref())?;

    match cli.command {
        Command::List { query, json } => {
            let state = query.apply(&package);
            if json {
                print!("{}", format_list_json(&state)?);
            } else {
                print!("{}", format_list(&state));
            }
        }
        Command::Options { json } => {
            let options = package.catalog.filter_options();
            if json {
                print!("{}", format_options_json(&options)?);
            } else {
                print!("{}", format_options(&options));
            }
        }
        Command::Render {
            query,
            output,
            document,
        } => {
            let state = query.apply(&package);
            let config = GridConfig::default();
            let html = if document {
                render_document(&package.catalog, &package.icons, &state, &config)
            } else {
                render_grid(&package.catalog, &package.icons, &state, &config)
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, html).with_context(|| format!("Write {}", path))?;
                    tracing::info!(path = %path, items = state.items.len(), "wrote grid");
                }
                None => print!("{html}"),
            }
        }
        #[cfg(feature = "egui")]
        Command::Gui => {
            let app = opgrid::egui_app::IconGridApp::new(package, GridConfig::default());
            opgrid::egui_app::run(app)?;
        }
    }
    Ok(())
}
