use std::io::{self, Write};
use std::path::Path;

use tadtool_core::models::{GenomicRegion, IndexSignal, RegionSet};

use crate::error::Result;
use crate::utils::{format_value, is_gzipped, write_output};

pub trait BedWrite {
    ///
    /// Write regions to disk as bed file, gzip compressed if the name ends in
    /// `.gz`
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> io::Result<()>;

    ///
    /// Write regions to disk as bed.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> io::Result<()>;

    /// Write regions as bed lines to any writer, e.g. stdout.
    fn write_bed_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()>;
}

impl BedWrite for [GenomicRegion] {
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        let path = path.as_ref();
        write_output(path, is_gzipped(path), |writer| self.write_bed_to(writer))
    }

    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        write_output(path, true, |writer| self.write_bed_to(writer))
    }

    fn write_bed_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for region in self {
            writeln!(writer, "{}", region.as_string())?;
        }
        Ok(())
    }
}

impl BedWrite for RegionSet {
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        self.regions.write_bed(path)
    }

    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        self.regions.write_bed_gz(path)
    }

    fn write_bed_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.regions.write_bed_to(writer)
    }
}

///
/// Write one `chr start end value` line per region, `nan` where the signal is
/// missing.
///
pub fn write_bedgraph_to<W: Write + ?Sized>(
    writer: &mut W,
    regions: &RegionSet,
    signal: &IndexSignal,
) -> Result<()> {
    signal.check_regions(regions)?;
    bedgraph_lines(writer, regions, signal)?;
    Ok(())
}

///
/// Write index values as a bedGraph file, gzip compressed if the name ends in
/// `.gz`.
///
pub fn write_bedgraph<P: AsRef<Path>>(
    path: P,
    regions: &RegionSet,
    signal: &IndexSignal,
) -> Result<()> {
    let path = path.as_ref();
    signal.check_regions(regions)?;

    write_output(path, is_gzipped(path), |writer| {
        bedgraph_lines(writer, regions, signal)
    })?;
    Ok(())
}

fn bedgraph_lines<W: Write + ?Sized>(
    writer: &mut W,
    regions: &RegionSet,
    signal: &IndexSignal,
) -> io::Result<()> {
    for (region, &value) in regions.iter().zip(signal.values()) {
        writeln!(writer, "{}\t{}", region.as_string(), format_value(value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;

    use crate::error::TadIoError;
    use tadtool_core::TadError;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    fn domains() -> Vec<GenomicRegion> {
        vec![
            GenomicRegion::new("chr1", 0, 5000),
            GenomicRegion::new("chr1", 5000, 10000),
        ]
    }

    #[rstest]
    fn test_write_bed_to_buffer() {
        let mut buffer: Vec<u8> = Vec::new();
        domains().write_bed_to(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "chr1\t0\t5000\nchr1\t5000\t10000\n"
        );
    }

    #[rstest]
    #[case("domains.bed")]
    #[case("domains.bed.gz")]
    fn test_save_bed(#[case] file_name: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join(file_name);

        domains().write_bed(&path).unwrap();

        let loaded = RegionSet::try_from(path.as_path()).unwrap();
        assert_eq!(loaded.regions, domains());
    }

    #[rstest]
    fn test_save_bed_gz() {
        let region_set = RegionSet::try_from(get_test_path("block10.bed")).unwrap();

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("regions.bed.gz");
        region_set.write_bed_gz(&path).unwrap();

        let loaded = RegionSet::try_from(path.as_path()).unwrap();
        assert_eq!(loaded.regions, region_set.regions);
    }

    #[rstest]
    fn test_write_bedgraph() {
        let regions = RegionSet::from(domains());
        let signal = IndexSignal::from(vec![f64::NAN, -0.5]);

        let mut buffer: Vec<u8> = Vec::new();
        write_bedgraph_to(&mut buffer, &regions, &signal).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "chr1\t0\t5000\tnan\nchr1\t5000\t10000\t-0.5\n"
        );

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("values.bedgraph");
        write_bedgraph(&path, &regions, &signal).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "chr1\t0\t5000\tnan\nchr1\t5000\t10000\t-0.5\n"
        );
    }

    #[rstest]
    fn test_write_bedgraph_length_mismatch() {
        let regions = RegionSet::from(domains());
        let signal = IndexSignal::from(vec![1.0]);

        let mut buffer: Vec<u8> = Vec::new();
        assert!(matches!(
            write_bedgraph_to(&mut buffer, &regions, &signal),
            Err(TadIoError::Core(TadError::BinCountMismatch { .. }))
        ));
    }
}
