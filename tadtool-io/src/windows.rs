use std::io::Write;
use std::path::{Path, PathBuf};

use tadtool_core::TadError;
use tadtool_core::utils::{checked_window_size, data_lines, get_dynamic_reader};

use crate::error::{Result, TadIoError};
use crate::utils::{is_gzipped, write_output};

///
/// Window sizes as given on the command line.
///
/// - one value naming an existing file: a list file
/// - one number: a single window size
/// - three numbers: `start stop step`, stop exclusive
/// - four or more numbers: an explicit list
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSizeSpec {
    File(PathBuf),
    Single(i64),
    Range { start: i64, stop: i64, step: i64 },
    List(Vec<i64>),
}

impl WindowSizeSpec {
    pub fn parse<S: AsRef<str>>(values: &[S]) -> std::result::Result<Self, TadError> {
        match values {
            [value] => {
                let value = value.as_ref();
                if Path::new(value).is_file() {
                    Ok(WindowSizeSpec::File(PathBuf::from(value)))
                } else {
                    parse_number(value).map(WindowSizeSpec::Single)
                }
            }
            [start, stop, step] => Ok(WindowSizeSpec::Range {
                start: parse_number(start.as_ref())?,
                stop: parse_number(stop.as_ref())?,
                step: parse_number(step.as_ref())?,
            }),
            values if values.len() >= 4 => values
                .iter()
                .map(|value| parse_number(value.as_ref()))
                .collect::<std::result::Result<Vec<i64>, TadError>>()
                .map(WindowSizeSpec::List),
            values => Err(TadError::InvalidWindowSpec(format!(
                "expected one value, a range (start stop step) or at least four values, \
                 got {} values",
                values.len()
            ))),
        }
    }

    ///
    /// Expand into the validated list of window sizes.
    ///
    pub fn resolve(&self) -> Result<Vec<u32>> {
        let window_sizes = match self {
            WindowSizeSpec::File(path) => read_window_sizes(path)?,
            WindowSizeSpec::Single(value) => vec![checked_window_size(*value)?],
            WindowSizeSpec::Range { start, stop, step } => {
                if *step <= 0 {
                    return Err(TadError::InvalidWindowSpec(format!(
                        "range step must be positive, got {}",
                        step
                    ))
                    .into());
                }
                let mut window_sizes = Vec::new();
                let mut value = *start;
                while value < *stop {
                    window_sizes.push(checked_window_size(value)?);
                    value = value.saturating_add(*step);
                }
                if window_sizes.is_empty() {
                    return Err(TadError::InvalidWindowSpec(format!(
                        "range {}..{} contains no window sizes",
                        start, stop
                    ))
                    .into());
                }
                window_sizes
            }
            WindowSizeSpec::List(values) => values
                .iter()
                .map(|&value| checked_window_size(value))
                .collect::<std::result::Result<Vec<u32>, TadError>>()?,
        };
        Ok(window_sizes)
    }
}

fn parse_number(value: &str) -> std::result::Result<i64, TadError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| TadError::InvalidWindowSpec(format!("'{}' is not an integer", value)))
}

///
/// Read window sizes from a text file: whitespace separated integers, `#`
/// comments allowed.
///
pub fn read_window_sizes<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;

    let mut window_sizes = Vec::new();
    for line in data_lines(reader) {
        let (line_number, line) = line?;
        for field in line.split_whitespace() {
            let value = field.parse::<i64>().map_err(|_| TadIoError::Parse {
                path: path.display().to_string(),
                line: line_number,
                message: format!("'{}' is not an integer", field),
            })?;
            window_sizes.push(checked_window_size(value)?);
        }
    }

    if window_sizes.is_empty() {
        return Err(TadError::InvalidWindowSpec(format!(
            "no window sizes found in {}",
            path.display()
        ))
        .into());
    }

    Ok(window_sizes)
}

///
/// Write window sizes one per line, readable by [read_window_sizes].
///
pub fn write_window_sizes<P: AsRef<Path>>(path: P, window_sizes: &[u32]) -> Result<()> {
    let path = path.as_ref();
    write_output(path, is_gzipped(path), |writer| {
        for window_size in window_sizes {
            writeln!(writer, "{}", window_size)?;
        }
        Ok(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[rstest]
    #[case(&["5000"], WindowSizeSpec::Single(5000))]
    #[case(
        &["1000", "5000", "1000"],
        WindowSizeSpec::Range { start: 1000, stop: 5000, step: 1000 }
    )]
    #[case(&["1000", "3000", "2000", "4000"], WindowSizeSpec::List(vec![1000, 3000, 2000, 4000]))]
    fn test_parse(#[case] values: &[&str], #[case] expected: WindowSizeSpec) {
        assert_eq!(WindowSizeSpec::parse(values).unwrap(), expected);
    }

    #[rstest]
    #[case(&[])]
    #[case(&["1000", "2000"])]
    #[case(&["abc"])]
    #[case(&["1000", "2000", "x"])]
    fn test_parse_invalid(#[case] values: &[&str]) {
        assert!(matches!(
            WindowSizeSpec::parse(values),
            Err(TadError::InvalidWindowSpec(_))
        ));
    }

    #[rstest]
    fn test_parse_file() {
        let path = get_test_path("windows.txt");
        let spec = WindowSizeSpec::parse(&[path.to_str().unwrap()]).unwrap();

        assert_eq!(spec, WindowSizeSpec::File(path));
        assert_eq!(spec.resolve().unwrap(), vec![1000, 2000, 3000]);
    }

    #[rstest]
    #[case(WindowSizeSpec::Single(5000), vec![5000])]
    #[case(
        WindowSizeSpec::Range { start: 1000, stop: 5000, step: 1000 },
        vec![1000, 2000, 3000, 4000]
    )]
    #[case(WindowSizeSpec::Range { start: 1000, stop: 5001, step: 2000 }, vec![1000, 3000, 5000])]
    #[case(WindowSizeSpec::List(vec![3000, 1000, 2000, 4000]), vec![3000, 1000, 2000, 4000])]
    fn test_resolve(#[case] spec: WindowSizeSpec, #[case] expected: Vec<u32>) {
        assert_eq!(spec.resolve().unwrap(), expected);
    }

    #[rstest]
    #[case(WindowSizeSpec::Single(0))]
    #[case(WindowSizeSpec::Single(-5))]
    #[case(WindowSizeSpec::Range { start: 1000, stop: 5000, step: 0 })]
    #[case(WindowSizeSpec::Range { start: 5000, stop: 1000, step: 1000 })]
    #[case(WindowSizeSpec::Range { start: 0, stop: 5000, step: 1000 })]
    #[case(WindowSizeSpec::List(vec![1000, 2000, -1, 4000]))]
    fn test_resolve_invalid(#[case] spec: WindowSizeSpec) {
        assert!(matches!(spec.resolve(), Err(TadIoError::Core(_))));
    }

    #[rstest]
    fn test_window_sizes_round_trip() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("windows.txt");

        write_window_sizes(&path, &[100_000, 50_000, 200_000]).unwrap();
        assert_eq!(
            read_window_sizes(&path).unwrap(),
            vec![100_000, 50_000, 200_000]
        );
    }

    #[rstest]
    fn test_read_window_sizes_errors() {
        let tempdir = tempfile::tempdir().unwrap();

        let empty = tempdir.path().join("empty.txt");
        std::fs::write(&empty, "# nothing here\n").unwrap();
        assert!(matches!(
            read_window_sizes(&empty),
            Err(TadIoError::Core(TadError::InvalidWindowSpec(_)))
        ));

        let bad = tempdir.path().join("bad.txt");
        std::fs::write(&bad, "1000 2000\n3k\n").unwrap();
        assert!(matches!(
            read_window_sizes(&bad),
            Err(TadIoError::Parse { line: 2, .. })
        ));
    }
}
