use std::io::{self, Stdout, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    tty::IsTty,
};

/// Operator-facing echo of every written record.
///
/// When attached to a terminal each line is colored by status class, the
/// same way log levels get colored in a log viewer. Otherwise lines are
/// written as-is so that piping stdout yields the exact file contents.
pub struct Console<W: Write> {
    out: W,
    colored: bool,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let colored = out.is_tty();
        Console { out, colored }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Console { out, colored }
    }

    pub fn echo(&mut self, line: &str, status: u16) -> io::Result<()> {
        if self.colored {
            queue!(
                self.out,
                SetForegroundColor(status_color(status)),
                Print(line),
                ResetColor,
                Print("\n")
            )?;
        } else {
            self.out.write_all(line.as_bytes())?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn status_color(status: u16) -> Color {
    match status {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Yellow,
        500..=599 => Color::Red,
        _ => Color::Grey,
    }
}
