use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use tadtool_core::models::{IndexMatrix, RegionSet};
use tadtool_index::{IndexAlgorithm, IndexConfig, NormalisationWindow, data_array};
use tadtool_io::{WindowSizeSpec, read_contact_matrix, write_index_matrix, write_window_sizes};

use crate::progress::spinner;

pub fn run_index(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let matrix_path = matches
        .get_one::<String>("matrix")
        .expect("A path to a contact matrix is required.");

    let regions_path = matches
        .get_one::<String>("regions")
        .expect("A path to a regions file is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let algorithm = matches
        .get_one::<String>("algorithm")
        .expect("An algorithm is required.");

    let window_sizes: Vec<String> = matches
        .get_many::<String>("window_sizes")
        .expect("Window sizes are required.")
        .cloned()
        .collect();

    // coerce arguments to types before touching any file
    let algorithm: IndexAlgorithm = algorithm.parse()?;
    let normalisation_window = NormalisationWindow::from_regions(
        matches.get_one::<usize>("normalisation_window").copied(),
    )?;
    let config = IndexConfig::new(algorithm).with_normalisation_window(normalisation_window);
    let window_sizes = WindowSizeSpec::parse(&window_sizes)?.resolve()?;

    let regions = RegionSet::try_from(Path::new(regions_path))
        .with_context(|| format!("Failed to load regions from {}", regions_path))?;
    let matrix = read_contact_matrix(matrix_path)
        .with_context(|| format!("Failed to load contact matrix from {}", matrix_path))?;
    info!(
        "Loaded {} regions and a {}x{} contact matrix",
        regions.len(),
        matrix.dimension(),
        matrix.dimension()
    );

    let pb = spinner(format!(
        "Computing {} index for {} window sizes",
        algorithm,
        window_sizes.len()
    ));
    let compute = || data_array(&matrix, &regions, &config, &window_sizes);
    let index: Result<IndexMatrix> = match matches.get_one::<usize>("threads") {
        Some(&threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(compute).map_err(Into::into)
        }
        None => compute().map_err(Into::into),
    };
    pb.finish_and_clear();
    let index = index?;

    write_index_matrix(output, &index)
        .with_context(|| format!("Failed to write index values to {}", output))?;
    info!(
        "Wrote {} index for {} window sizes to {}",
        algorithm,
        index.window_sizes().len(),
        output
    );

    if let Some(windows_out) = matches.get_one::<String>("windows_out") {
        write_window_sizes(windows_out, index.window_sizes())
            .with_context(|| format!("Failed to write window sizes to {}", windows_out))?;
    }

    Ok(())
}
