use clap::{Arg, ArgGroup, Command, value_parser};

pub const TADS_CMD: &str = "tads";
pub const DEFAULT_ALGORITHM: &str = "insulation";

pub fn create_tads_cli() -> Command {
    Command::new(TADS_CMD)
        .author("Vaquerizas lab")
        .about(
            "Call TADs at one window size and cutoff from a Hi-C matrix or precomputed index data.",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("regions")
                .required(true)
                .help("BED file with the regions (bins) of the matrix, in matrix order"),
        )
        .arg(
            Arg::new("window_size")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Window size in base pairs"),
        )
        .arg(
            Arg::new("cutoff")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Index cutoff for accepting a boundary"),
        )
        .arg(Arg::new("output").help("Output BED file for the called domains (stdout if omitted)"))
        .arg(
            Arg::new("matrix")
                .short('m')
                .long("matrix")
                .help("Contact matrix (.npy or text) to compute the index from"),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .requires("window_sizes")
                .help("Precomputed index values (.npy or text), one row per window size"),
        )
        .arg(
            Arg::new("window_sizes")
                .short('w')
                .long("window-sizes")
                .num_args(1..)
                .help(
                    "Window sizes of the rows in --data: \
                     a file, a single value, start stop step, or a list",
                ),
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
            Arg::new("write_values")
                .short('v')
                .long("write-values")
                .help("Also write the index values used for calling to this bedGraph file"),
        )
        .group(
            ArgGroup::new("input")
                .args(["matrix", "data"])
                .required(true),
        )
}
