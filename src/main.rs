use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use featcli::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Request and cache a Spotify access token
    Auth,

    /// Build the featured playlist dataset for a list of countries
    Build(BuildOptions),

    /// Convert a CSV file into a JSON array of records
    Convert(ConvertOptions),

    /// List the known country codes
    Countries(CountriesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildOptions {
    /// Comma separated country codes, e.g. US,GB,DE
    #[clap(long, value_parser = utils::parse_country_codes)]
    pub countries: utils::CountryCodes,

    /// Tracks fetched per playlist (defaults to TRACK_LIMIT or 10)
    #[clap(long, conflicts_with = "all_tracks")]
    pub limit: Option<usize>,

    /// Fetch every track of each playlist
    #[clap(long)]
    pub all_tracks: bool,

    /// Write the dataset as CSV to this path
    #[clap(long)]
    pub csv: Option<PathBuf>,

    /// Write the dataset as JSON to this path
    #[clap(long)]
    pub json: Option<PathBuf>,

    /// Print the dataset as a table
    #[clap(long)]
    pub preview: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertOptions {
    /// CSV file with a header row
    input: PathBuf,
    /// JSON file to write
    output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CountriesOptions {
    /// Filter by name or code
    #[clap(long)]
    search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Build(opt) => {
            let track_limit = match (opt.all_tracks, opt.limit) {
                (true, _) => None,
                (false, Some(0)) => None,
                (false, Some(n)) => Some(n),
                (false, None) => config::track_limit(),
            };
            let outputs = cli::DatasetOutputs {
                csv: opt.csv,
                json: opt.json,
                preview: opt.preview,
            };
            cli::dataset(opt.countries, track_limit, outputs).await
        }
        Command::Convert(opt) => cli::convert(&opt.input, &opt.output),
        Command::Countries(opt) => cli::countries(opt.search),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
