//! Terminal output for mksdk.
//!
//! Human mode writes right-aligned status lines to stderr. JSON mode writes
//! one event per line to stdout and keeps stderr for errors.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// How much human output to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    Normal,
    /// Per-item lines instead of a progress bar
    Verbose,
}

/// `--color` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when stderr is a terminal
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status word printed in front of a human-readable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Created,
    Finished,
    Creating,
    Copying,
    Writing,
    Generating,
    Skipped,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Created => "Created",
            Status::Finished => "Finished",
            Status::Creating => "Creating",
            Status::Copying => "Copying",
            Status::Writing => "Writing",
            Status::Generating => "Generating",
            Status::Skipped => "Skipped",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Status::Created | Status::Finished => GREEN,
            Status::Skipped => YELLOW,
            _ => CYAN,
        }
    }
}

const GREEN: &str = "\x1b[1;32m";
const CYAN: &str = "\x1b[1;36m";
const YELLOW: &str = "\x1b[1;33m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Width of the right-aligned status column.
const STATUS_WIDTH: usize = 12;

#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    json: bool,
    color: bool,
}

impl Shell {
    pub fn new(verbosity: Verbosity, color: ColorChoice, json: bool) -> Self {
        let color = !json
            && match color {
                ColorChoice::Auto => io::stderr().is_terminal(),
                ColorChoice::Always => true,
                ColorChoice::Never => false,
            };

        Shell {
            verbosity,
            json,
            color,
        }
    }

    /// Build a shell from the global CLI flags. `--message-format json`
    /// overrides `--quiet` and `--verbose`.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice, json: bool) -> Self {
        let verbosity = match (json, quiet, verbose) {
            (true, _, _) => Verbosity::Normal,
            (false, true, _) => Verbosity::Quiet,
            (false, false, true) => Verbosity::Verbose,
            _ => Verbosity::Normal,
        };
        Shell::new(verbosity, color, json)
    }

    /// A shell that prints no status lines.
    pub fn silent() -> Self {
        Shell::new(Verbosity::Quiet, ColorChoice::Never, false)
    }

    pub fn is_verbose(&self) -> bool {
        !self.json && self.verbosity == Verbosity::Verbose
    }

    /// Print `{status:>12} {msg}` to stderr unless quiet or in JSON mode.
    pub fn status(&self, status: Status, msg: impl Display) {
        if let Some(line) = self.status_line(status, msg) {
            eprintln!("{}", line);
        }
    }

    /// Like [`Shell::status`], but only with `--verbose`.
    pub fn verbose_status(&self, status: Status, msg: impl Display) {
        if self.is_verbose() {
            self.status(status, msg);
        }
    }

    /// Report a fatal error. Printed in every mode; JSON mode also gets an
    /// `error` event.
    pub fn error(&self, msg: impl Display) {
        let msg = msg.to_string();
        self.json_event(&serde_json::json!({
            "reason": "error",
            "message": msg,
        }));
        eprintln!("{}", self.error_line(&msg));
    }

    /// Print one JSON event to stdout. No-op outside JSON mode.
    pub fn json_event(&self, event: &serde_json::Value) {
        if !self.json {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", event);
        let _ = stdout.flush();
    }

    /// Print a start line now; [`Span::finish`] prints the `Finished` line.
    pub fn span(&self, status: Status, msg: impl Display) -> Span<'_> {
        self.status(status, msg);
        Span {
            shell: self,
            start: Instant::now(),
        }
    }

    /// A progress bar over `total` items. Drawn only in normal mode on a
    /// terminal, and only for more than one item.
    pub fn progress(&self, total: u64, msg: impl Display) -> Progress {
        let draw = self.verbosity == Verbosity::Normal
            && !self.json
            && total > 1
            && io::stderr().is_terminal();
        if !draw {
            return Progress { bar: None };
        }

        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(msg.to_string());
        Progress { bar: Some(bar) }
    }

    fn status_line(&self, status: Status, msg: impl Display) -> Option<String> {
        if self.json || self.verbosity == Verbosity::Quiet {
            return None;
        }
        let label = format!("{:>w$}", status.label(), w = STATUS_WIDTH);
        Some(format!("{} {}", self.paint(status.ansi(), &label), msg))
    }

    fn error_line(&self, msg: &str) -> String {
        format!("{}: {}", self.paint(RED, "error"), msg)
    }

    fn paint(&self, ansi: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", ansi, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// A timed step started by [`Shell::span`].
pub struct Span<'a> {
    shell: &'a Shell,
    start: Instant,
}

impl Span<'_> {
    /// Print `Finished {msg} in {elapsed}`.
    pub fn finish(self, msg: impl Display) {
        let elapsed = format_duration(self.start.elapsed());
        self.shell
            .status(Status::Finished, format!("{} in {}", msg, elapsed));
    }
}

/// Progress over a known number of items; a no-op when no bar is drawn.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn inc(&self, delta: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(delta);
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}
