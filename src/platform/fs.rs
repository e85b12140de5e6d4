// linesift - platform/fs.rs
//
// Opening the two files of a filter run, with errors that carry the path.

use crate::util::constants;
use crate::util::error::{FileAccessError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Open `path` for buffered, sequential reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| FileAccessError::OpenInput {
        path: path.to_path_buf(),
        source: e,
    })?;

    // A directory opens fine on some platforms and only fails on first read.
    // Reject it here so the error names the right operation.
    match file.metadata() {
        Ok(meta) if meta.is_dir() => {
            return Err(FileAccessError::OpenInput {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path is a directory",
                ),
            });
        }
        Ok(meta) => {
            tracing::debug!(path = %path.display(), size = meta.len(), "Input opened");
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Input metadata unavailable");
        }
    }

    Ok(BufReader::with_capacity(
        constants::READ_BUFFER_CAPACITY,
        file,
    ))
}

/// Create (or truncate) `path` for buffered writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| FileAccessError::CreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "Output created");
    Ok(BufWriter::with_capacity(
        constants::WRITE_BUFFER_CAPACITY,
        file,
    ))
}

/// Fail with `CreateOutput` if `output` names the same file as `input`.
///
/// Compares canonical paths, so `./a.txt` and `a.txt` are caught. An output
/// that does not exist yet cannot be the input.
pub fn ensure_distinct_output(input: &Path, output: &Path) -> Result<()> {
    let (Ok(input_real), Ok(output_real)) = (input.canonicalize(), output.canonicalize()) else {
        return Ok(());
    };
    if input_real == output_real {
        return Err(FileAccessError::CreateOutput {
            path: output.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("output is the input file '{}'", input.display()),
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, Write};

    #[test]
    fn test_open_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_input(&dir.path().join("absent.txt"));
        assert!(
            matches!(result, Err(FileAccessError::OpenInput { .. })),
            "expected OpenInput, got {:?}",
            result.err()
        );
    }

    #[test]
    fn test_open_directory_as_input_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_input(dir.path());
        assert!(matches!(result, Err(FileAccessError::OpenInput { .. })));
    }

    #[test]
    fn test_open_existing_input_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "a\nb\n").unwrap();

        let reader = open_input(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_create_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale content").unwrap();

        let mut writer = create_output(&path).unwrap();
        writer.write_all(b"new").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_distinct_output_checks() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "a\n").unwrap();

        assert!(ensure_distinct_output(&input, &dir.path().join("new.txt")).is_ok());

        let other = dir.path().join("other.txt");
        std::fs::write(&other, "b\n").unwrap();
        assert!(ensure_distinct_output(&input, &other).is_ok());

        let same = ensure_distinct_output(&input, &dir.path().join(".").join("in.txt"));
        assert!(matches!(same, Err(FileAccessError::CreateOutput { .. })));
    }

    #[test]
    fn test_create_output_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = create_output(&dir.path().join("no_such_dir").join("out.txt"));
        assert!(matches!(result, Err(FileAccessError::CreateOutput { .. })));
    }
}
