//! Synthetic Apache access log records.
//!
//! A [`LogRecord`] is built from fixed choice sets and fixed ranges, rendered
//! once with [`Display`](fmt::Display) and then dropped. Rendering follows the
//! combined log format:
//!
//! ```text
//! <ip> - - [<timestamp>] "<METHOD> <path> HTTP/1.1" <status> <size> "-" "<user-agent>"
//! ```

use std::fmt;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// strftime-style format of the bracketed timestamp.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub const PATHS: [&str; 5] = ["/", "/login", "/api/data", "/users", "/images/logo.png"];

pub const STATUS_CODES: [u16; 6] = [200, 301, 400, 403, 404, 500];

pub const USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)",
    "Mozilla/5.0 (X11; Linux x86_64)",
    "curl/8.0.1",
    "PostmanRuntime/7.32.0",
];

/// Response size in bytes, both ends inclusive.
pub const BYTES_RANGE: RangeInclusive<u32> = 200..=5000;

/// Pause between two records, in seconds.
pub const DELAY_SECS: RangeInclusive<f64> = 0.5..=2.0;

const REFERRER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl Distribution<Method> for Standard {
    fn sample<R>(&self, rng: &mut R) -> Method
    where
        R: Rng + ?Sized,
    {
        match rng.gen_range(0..4) {
            0 => Method::Get,
            1 => Method::Post,
            2 => Method::Put,
            3 => Method::Delete,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One access log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub ip: Ipv4Addr,
    pub timestamp: DateTime<FixedOffset>,
    pub method: Method,
    pub path: &'static str,
    pub status: u16,
    pub bytes: u32,
    pub user_agent: &'static str,
}

impl LogRecord {
    /// Draw every random field from `rng` and stamp the record with
    /// `timestamp`.
    ///
    /// Fields are drawn in a fixed order so that equally seeded generators
    /// produce equal records.
    pub fn generate<R>(rng: &mut R, timestamp: DateTime<FixedOffset>) -> Self
    where
        R: Rng + ?Sized,
    {
        let ip = Ipv4Addr::new(
            rng.gen_range(0..=u8::MAX),
            rng.gen_range(0..=u8::MAX),
            rng.gen_range(0..=u8::MAX),
            rng.gen_range(0..=u8::MAX),
        );
        let method = rng.sample(Standard);
        let path = PATHS[rng.gen_range(0..PATHS.len())];
        let status = STATUS_CODES[rng.gen_range(0..STATUS_CODES.len())];
        let bytes = rng.gen_range(BYTES_RANGE);
        let user_agent = USER_AGENTS[rng.gen_range(0..USER_AGENTS.len())];

        LogRecord {
            ip,
            timestamp,
            method,
            path,
            status,
            bytes,
            user_agent,
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {} \"{}\" \"{}\"",
            self.ip,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.method,
            self.path,
            self.status,
            self.bytes,
            REFERRER,
            self.user_agent,
        )
    }
}

/// Current local time, keeping the local UTC offset.
pub fn now() -> DateTime<FixedOffset> {
    let now = Local::now();
    now.with_timezone(now.offset())
}

/// Random pause before the next record.
pub fn next_delay<R>(rng: &mut R) -> Duration
where
    R: Rng + ?Sized,
{
    Duration::from_secs_f64(rng.gen_range(DELAY_SECS))
}
