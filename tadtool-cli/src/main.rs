mod index;
mod progress;
mod tads;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "tadtool";
    pub const BIN_NAME: &str = "tadtool";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Vaquerizas lab")
        .about(
            "Find topologically associating domains in Hi-C data using insulation or \
             directionality index signals.",
        )
        .subcommand_required(true)
        .subcommand(tads::cli::create_tads_cli())
        .subcommand(index::cli::create_index_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // TAD CALLING
        //
        Some((tads::cli::TADS_CMD, matches)) => {
            tads::handlers::run_tads(matches)?;
        }

        //
        // INDEX COMPUTATION
        //
        Some((index::cli::INDEX_CMD, matches)) => {
            index::handlers::run_index(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
