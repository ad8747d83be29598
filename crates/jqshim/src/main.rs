use crate::prelude::*;
use clap::Parser;

mod each;
mod error;
mod filter;
mod input;
mod map;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "jQuery-style filter, each and map over the elements of an HTML document"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// HTML file to read (reads stdin when absent or "-")
    #[clap(long, short, env = "JQSHIM_INPUT", global = true)]
    input: Option<std::path::PathBuf>,

    /// Parse the input as an HTML fragment instead of a full document
    #[clap(long, env = "JQSHIM_FRAGMENT", global = true, default_value = "false")]
    fragment: bool,

    /// Whether to display additional information.
    #[clap(long, env = "JQSHIM_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Keep the selected elements that pass a selector or predicate
    Filter(crate::filter::FilterOptions),

    /// Visit every selected element as (index, element)
    Each(crate::each::EachOptions),

    /// Project every selected element to a value
    Map(crate::map::MapOptions),
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let app = App::parse();

    init_logger(app.global.verbose);
    color_eyre::install()?;

    let html = input::read_input(app.global.input.as_deref())?;
    let document = input::parse(&html, app.global.fragment);

    match app.command {
        SubCommands::Filter(options) => crate::filter::run(options, &document),
        SubCommands::Each(options) => crate::each::run(options, &document),
        SubCommands::Map(options) => crate::map::run(options, &document),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
