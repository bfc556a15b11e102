use std::io::{self, Write};
use std::path::PathBuf;

/// Errors that stop the generator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
    /// Appending or flushing a record to the output file failed.
    #[error("failed to write to log file: {0}")]
    Write(#[source] io::Error),
    /// Echoing a record to the console failed.
    #[error("failed to echo record to stdout: {0}")]
    Console(#[source] io::Error),
}

/// Write a fatal error for the operator, independent of any log filter.
pub fn report<W: Write>(out: &mut W, err: &Error) -> io::Result<()> {
    writeln!(out, "Error: {err}")?;
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn report_names_the_path() {
        let err = Error::Open {
            path: PathBuf::from("/nonexistent_dir/x.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let mut out = Vec::new();
        report(&mut out, &err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: failed to open log file /nonexistent_dir/x.log: No such file or directory\n"
        );
    }

    #[test]
    fn report_write_failure() {
        let err = Error::Write(io::Error::new(io::ErrorKind::Other, "disk full"));
        let mut out = Vec::new();
        report(&mut out, &err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: failed to write to log file: disk full\n"
        );
    }
}
