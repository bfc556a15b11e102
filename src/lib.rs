//! Synthetic Apache access log generator.
//!
//! [`record`] builds random log lines, [`writer`] appends them to a file,
//! echoes them to the console and paces the loop.

pub mod config;
pub mod console;
pub mod error;
pub mod record;
pub mod writer;

pub use error::Error;
pub use record::LogRecord;
pub use writer::Writer;
