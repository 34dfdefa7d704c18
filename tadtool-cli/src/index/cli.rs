use clap::{Arg, Command, value_parser};

pub const INDEX_CMD: &str = "index";
pub const DEFAULT_ALGORITHM: &str = "insulation";

pub fn create_index_cli() -> Command {
    Command::new(INDEX_CMD)
        .author("Vaquerizas lab")
        .about("Compute an index for many window sizes and save it for later TAD calling.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("matrix")
                .required(true)
                .help("Contact matrix (.npy or text)"),
        )
        .arg(
            Arg::new("regions")
                .required(true)
                .help("BED file with the regions (bins) of the matrix, in matrix order"),
        )
        .arg(
            Arg::new("window_sizes")
                .short('w')
                .long("window-sizes")
                .required(true)
                .num_args(1..)
                .help("Window sizes: a file, a single value, start stop step, or a list"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .required(true)
                .help("Output file for the index values (.npy or text)"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .default_value(DEFAULT_ALGORITHM)
                .help("Index algorithm: insulation, ninsulation or directionality"),
        )
        .arg(
            Arg::new("normalisation_window")
                .short('n')
                .long("normalisation-window")
                .value_parser(value_parser!(usize))
                .help(
                    "Regions in the sliding normalisation window \
                     (ninsulation only; whole chromosome if omitted)",
                ),
        )
        .arg(
            Arg::new("windows_out")
                .long("windows-out")
                .help("Write the resolved window sizes to this file, one per line"),
        )
        .arg(
            Arg::new("threads")
                .short('p')
                .long("threads")
                .value_parser(value_parser!(usize))
                .help("Number of worker threads (all cores if omitted)"),
        )
}
