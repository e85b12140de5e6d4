// linesift - core/filter.rs
//
// The line filter: one sequential pass copying every line that is not a
// range record. Core layer: works on any BufRead/Write pair and never opens
// files itself. Paths are taken only to give errors their context.

use crate::core::model::{FilterSummary, LineDisposition};
use crate::core::pattern;
use crate::util::constants;
use crate::util::error::{FileAccessError, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// Copy every line of `reader` whose stripped text is not a range record
/// to `writer`, byte for byte, then flush `writer`.
///
/// Lines are read as raw bytes up to and including `\n`, so CRLF endings,
/// a missing final newline and non-UTF-8 content all pass through untouched.
/// The first I/O failure aborts the pass; anything written before it stays
/// in `writer`.
pub fn filter_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    input_path: &Path,
    output_path: &Path,
) -> Result<FilterSummary> {
    let mut summary = FilterSummary::default();
    let mut line = Vec::with_capacity(constants::LINE_BUFFER_CAPACITY);

    loop {
        line.clear();
        let line_number = summary.lines_read + 1;

        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| FileAccessError::Read {
                path: input_path.to_path_buf(),
                line_number,
                source: e,
            })?;
        if n == 0 {
            break;
        }

        let disposition = pattern::classify(&line);
        tracing::trace!(line = line_number, decision = disposition.label());

        if disposition == LineDisposition::Keep {
            writer
                .write_all(&line)
                .map_err(|e| FileAccessError::Write {
                    path: output_path.to_path_buf(),
                    line_number,
                    source: e,
                })?;
        }
        summary.record(disposition, line.len());
    }

    writer.flush().map_err(|e| FileAccessError::Flush {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn run(input: &[u8]) -> (Vec<u8>, FilterSummary) {
        let mut out = Vec::new();
        let summary = filter_lines(
            Cursor::new(input),
            &mut out,
            Path::new("in.txt"),
            Path::new("out.txt"),
        )
        .unwrap();
        (out, summary)
    }

    /// Writer that accepts `budget` write calls and then fails.
    struct FailingWriter {
        budget: usize,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.budget -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writer whose flush always fails.
    struct UnflushableWriter;

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    /// Reader that yields one line and then an I/O error.
    struct BrokenReader {
        served: bool,
    }

    impl io::Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "bad sector"));
            }
            self.served = true;
            let line = b"first\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn test_drops_records_keeps_others() {
        let (out, summary) = run(b"1 - 2 : 3.4\nhello world\n100-200:300.400\n");
        assert_eq!(out, b"hello world\n");
        assert_eq!(summary.lines_read, 3);
        assert_eq!(summary.lines_kept, 1);
        assert_eq!(summary.lines_dropped, 2);
        assert_eq!(summary.bytes_written, 12);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let (out, summary) = run(b"");
        assert!(out.is_empty());
        assert_eq!(summary, FilterSummary::default());
    }

    #[test]
    fn test_boundary_lines() {
        let input = b"42 - 7 : 3.14\n42-7:3\n  12  -  34  :  5.6  \n12 - 34 : 5.6 extra\n";
        let (out, _) = run(input);
        assert_eq!(out, b"42-7:3\n12 - 34 : 5.6 extra\n");
    }

    #[test]
    fn test_kept_lines_are_unstripped() {
        let (out, _) = run(b"   padded text   \n\tindented\n");
        assert_eq!(out, b"   padded text   \n\tindented\n");
    }

    #[test]
    fn test_crlf_and_missing_final_newline_preserved() {
        let (out, summary) = run(b"keep me\r\n1-2:3.4\r\nlast line");
        assert_eq!(out, b"keep me\r\nlast line");
        assert_eq!(summary.lines_read, 3);
    }

    #[test]
    fn test_final_unterminated_record_dropped() {
        let (out, _) = run(b"text\n5 - 6 : 7.8");
        assert_eq!(out, b"text\n");
    }

    #[test]
    fn test_blank_lines_kept() {
        let (out, _) = run(b"\n\n1-2:3.4\n\n");
        assert_eq!(out, b"\n\n\n");
    }

    #[test]
    fn test_invalid_utf8_passes_through() {
        let input = b"caf\xe9\n1-2:3.4\n\xff\xfe\n";
        let (out, _) = run(input);
        assert_eq!(out, b"caf\xe9\n\xff\xfe\n");
    }

    #[test]
    fn test_order_preserved() {
        let input = b"a\n1-1:1.1\nb\n2-2:2.2\nc\n";
        let (out, _) = run(input);
        assert_eq!(out, b"a\nb\nc\n");
    }

    #[test]
    fn test_second_pass_is_identity() {
        let input = b"x\n1 - 2 : 3.4\ny 1-2:3.4\n  \n9-9:9.9\r\nz";
        let (first, _) = run(input);
        let (second, summary) = run(&first);
        assert_eq!(first, second);
        assert_eq!(summary.lines_dropped, 0);
    }

    #[test]
    fn test_write_failure_reports_output_path_and_line() {
        let mut writer = FailingWriter {
            budget: 1,
            written: Vec::new(),
        };
        let result = filter_lines(
            Cursor::new(&b"one\n1-2:3.4\ntwo\nthree\n"[..]),
            &mut writer,
            Path::new("in.txt"),
            Path::new("out.txt"),
        );
        match result {
            Err(FileAccessError::Write {
                path, line_number, ..
            }) => {
                assert_eq!(path, Path::new("out.txt"));
                assert_eq!(line_number, 3);
            }
            other => panic!("expected Write error, got {other:?}"),
        }
        // The line written before the failure remains.
        assert_eq!(writer.written, b"one\n");
    }

    #[test]
    fn test_flush_failure_reported() {
        let result = filter_lines(
            Cursor::new(&b"one\n"[..]),
            UnflushableWriter,
            Path::new("in.txt"),
            Path::new("out.txt"),
        );
        assert!(
            matches!(result, Err(FileAccessError::Flush { .. })),
            "expected Flush error, got {result:?}"
        );
    }

    #[test]
    fn test_read_failure_reports_input_path_and_line() {
        let reader = io::BufReader::new(BrokenReader { served: false });
        let mut out = Vec::new();
        let result = filter_lines(reader, &mut out, Path::new("in.txt"), Path::new("out.txt"));
        match result {
            Err(FileAccessError::Read {
                path, line_number, ..
            }) => {
                assert_eq!(path, Path::new("in.txt"));
                assert_eq!(line_number, 2);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
        assert_eq!(out, b"first\n");
    }
}
