use owo_colors::OwoColorize;
use std::io::{self, Stdout, Write};

const SUCCESS_MARKER: &str = "✅";
const FAILURE_MARKER: &str = "❌";

/// User-facing status lines. Colors are applied only when `color` is set
/// (TTY stdout); otherwise the bytes written are plain text.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), is_tty())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", SUCCESS_MARKER, msg.green().bold())
        } else {
            writeln!(self.out, "{} {}", SUCCESS_MARKER, msg)
        }
    }

    pub fn failure(&mut self, msg: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", FAILURE_MARKER, msg.red().bold())
        } else {
            writeln!(self.out, "{} {}", FAILURE_MARKER, msg)
        }
    }

    /// Plain line without a marker.
    pub fn line(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", msg)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
