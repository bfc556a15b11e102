//! Appends generated records to the output file and echoes them.

use std::fs::{File, OpenOptions};
use std::io::{Stdout, Write};
use std::path::Path;
use std::thread::sleep;

use rand::Rng;
use tracing::debug;

use crate::console::Console;
use crate::error::Error;
use crate::record::{self, LogRecord};

pub struct Writer<F: Write, C: Write> {
    file: F,
    console: Console<C>,
}

impl Writer<File, Stdout> {
    /// Open `path` for appending, creating it if needed, and echo to stdout.
    pub fn open(path: &Path) -> Result<Self, Error> {
        Writer::open_with(path, Console::stdout())
    }
}

impl<C: Write> Writer<File, C> {
    /// Open `path` for appending, creating it if needed, and echo to
    /// `console`. Existing contents are never touched.
    pub fn open_with(path: &Path, console: Console<C>) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Writer::new(file, console))
    }
}

impl<F: Write, C: Write> Writer<F, C> {
    pub fn new(file: F, console: Console<C>) -> Self {
        Writer { file, console }
    }

    /// Append `record` as one line, flush, then echo it. Returns the line
    /// without its trailing newline.
    pub fn write_record(&mut self, record: &LogRecord) -> Result<String, Error> {
        let line = record.to_string();

        self.file.write_all(line.as_bytes()).map_err(Error::Write)?;
        self.file.write_all(b"\n").map_err(Error::Write)?;
        self.file.flush().map_err(Error::Write)?;

        self.console
            .echo(&line, record.status)
            .map_err(Error::Console)?;
        Ok(line)
    }

    pub fn into_parts(self) -> (F, Console<C>) {
        (self.file, self.console)
    }
}

/// Generate, write and pause, forever. Only returns if a write fails.
pub fn run<F, C, R>(mut writer: Writer<F, C>, rng: &mut R) -> Result<(), Error>
where
    F: Write,
    C: Write,
    R: Rng + ?Sized,
{
    loop {
        let record = LogRecord::generate(rng, record::now());
        writer.write_record(&record)?;

        let delay = record::next_delay(rng);
        debug!(status = record.status, delay_ms = delay.as_millis() as u64, "record written");
        sleep(delay);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io;

    use chrono::{FixedOffset, TimeZone};
    use rand::{rngs::StdRng, SeedableRng};

    struct FailingWrite;

    impl Write for FailingWrite {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FlushCounter {
        buf: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn record(rng: &mut StdRng) -> LogRecord {
        let timestamp = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap();
        LogRecord::generate(rng, timestamp)
    }

    #[test]
    fn n_records_n_lines_each_echoed_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut writer = Writer::new(Vec::new(), Console::new(Vec::new(), false));

        let mut written = Vec::new();
        for _ in 0..25 {
            let record = record(&mut rng);
            written.push(writer.write_record(&record).unwrap());
        }

        let (file, console) = writer.into_parts();
        let file = String::from_utf8(file).unwrap();
        let echoed = String::from_utf8(console.into_inner()).unwrap();

        assert!(file.ends_with('\n'));
        assert_eq!(file.lines().count(), 25);
        assert_eq!(file.lines().collect::<Vec<_>>(), written);
        assert_eq!(echoed, file);
    }

    #[test]
    fn every_record_is_flushed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut writer = Writer::new(FlushCounter::default(), Console::new(io::sink(), false));

        for _ in 0..4 {
            let record = record(&mut rng);
            writer.write_record(&record).unwrap();
        }

        let (file, _) = writer.into_parts();
        assert_eq!(file.flushes, 4);
        assert_eq!(file.buf.iter().filter(|b| **b == b'\n').count(), 4);
    }

    #[test]
    fn write_failure_is_reported_and_not_echoed() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut writer = Writer::new(FailingWrite, Console::new(Vec::new(), false));

        let err = writer.write_record(&record(&mut rng)).unwrap_err();
        assert!(matches!(err, Error::Write(_)));

        let (_, console) = writer.into_parts();
        assert!(console.into_inner().is_empty());
    }

    #[test]
    fn console_failure_is_reported() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut writer = Writer::new(Vec::new(), Console::new(FailingWrite, false));

        let err = writer.write_record(&record(&mut rng)).unwrap_err();
        assert!(matches!(err, Error::Console(_)));

        let (file, _) = writer.into_parts();
        assert_eq!(file.iter().filter(|b| **b == b'\n').count(), 1);
    }

    #[test]
    fn run_stops_on_write_failure() {
        let mut rng = StdRng::seed_from_u64(9);
        let writer = Writer::new(FailingWrite, Console::new(io::sink(), false));

        let err = run(writer, &mut rng).unwrap_err();
        assert!(matches!(err, Error::Write(_)));
    }
}
