use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use tadtool_callers::TadCaller;
use tadtool_core::models::{IndexSignal, RegionSet};
use tadtool_core::utils::checked_window_size;
use tadtool_index::{IndexAlgorithm, IndexConfig, NormalisationWindow, data_array};
use tadtool_io::{
    BedWrite, WindowSizeSpec, read_contact_matrix, read_index_matrix, write_bedgraph,
};

use crate::progress::spinner;

pub fn run_tads(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let regions_path = matches
        .get_one::<String>("regions")
        .expect("A path to a regions file is required.");

    let window_size = *matches
        .get_one::<i64>("window_size")
        .expect("A window size is required.");

    let cutoff = *matches
        .get_one::<f64>("cutoff")
        .expect("A cutoff is required.");

    let algorithm = matches
        .get_one::<String>("algorithm")
        .expect("An algorithm is required.");

    // coerce arguments to types before touching any file
    let algorithm: IndexAlgorithm = algorithm.parse()?;
    let window_size = checked_window_size(window_size)?;
    let normalisation_window = NormalisationWindow::from_regions(
        matches.get_one::<usize>("normalisation_window").copied(),
    )?;
    let config = IndexConfig::new(algorithm).with_normalisation_window(normalisation_window);

    let regions = RegionSet::try_from(Path::new(regions_path))
        .with_context(|| format!("Failed to load regions from {}", regions_path))?;
    info!("Loaded {} regions from {}", regions.len(), regions_path);

    let signal = match matches.get_one::<String>("matrix") {
        Some(matrix_path) => signal_from_matrix(matrix_path, &regions, &config, window_size)?,
        None => {
            let data_path = matches
                .get_one::<String>("data")
                .expect("Either a matrix or index data is required.");
            let window_sizes: Vec<String> = matches
                .get_many::<String>("window_sizes")
                .expect("Window sizes are required with index data.")
                .cloned()
                .collect();
            signal_from_data(data_path, &window_sizes, &regions, window_size)?
        }
    };
    info!(
        "{} index defined for {} of {} regions",
        algorithm,
        signal.defined_count(),
        signal.len()
    );

    if let Some(values_path) = matches.get_one::<String>("write_values") {
        write_bedgraph(values_path, &regions, &signal)
            .with_context(|| format!("Failed to write index values to {}", values_path))?;
    }

    let caller = TadCaller::from(algorithm);
    let domains = caller.call(&signal, cutoff, &regions)?;
    info!(
        "Called {} TADs with the {} caller at cutoff {}",
        domains.len(),
        caller,
        cutoff
    );

    match matches.get_one::<String>("output") {
        Some(output) => domains
            .write_bed(output)
            .with_context(|| format!("Failed to write TADs to {}", output))?,
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            domains.write_bed_to(&mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn signal_from_matrix(
    matrix_path: &str,
    regions: &RegionSet,
    config: &IndexConfig,
    window_size: u32,
) -> Result<IndexSignal> {
    let matrix = read_contact_matrix(matrix_path)
        .with_context(|| format!("Failed to load contact matrix from {}", matrix_path))?;

    let pb = spinner(format!(
        "Computing {} index at window size {}",
        config.algorithm, window_size
    ));
    let index = data_array(&matrix, regions, config, &[window_size]);
    pb.finish_and_clear();

    Ok(index?.signal(window_size)?)
}

fn signal_from_data(
    data_path: &str,
    window_sizes: &[String],
    regions: &RegionSet,
    window_size: u32,
) -> Result<IndexSignal> {
    let window_sizes = WindowSizeSpec::parse(window_sizes)?.resolve()?;
    let index = read_index_matrix(data_path, window_sizes, regions.len())
        .with_context(|| format!("Failed to load index data from {}", data_path))?;

    Ok(index.signal(window_size)?)
}
