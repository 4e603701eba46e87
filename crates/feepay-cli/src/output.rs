use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

/// Print `value` as JSON, or run `human` against a coloured stdout.
pub fn report<T, F>(value: &T, human: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&mut StandardStream) -> io::Result<()>,
{
    if is_json() {
        return print(value);
    }
    let mut out = stdout();
    human(&mut out)?;
    out.reset()?;
    Ok(())
}

pub fn headline(out: &mut StandardStream, msg: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    writeln!(out, "{msg}")?;
    out.reset()
}

pub fn field(out: &mut StandardStream, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "{label}: {value}")
}

#[derive(Debug, Serialize)]
struct FailureOut<'a> {
    ok: bool,
    context: &'a str,
    error: String,
}

/// Report a failed remote operation. The error text is passed through
/// unmodified; the exit status is left alone.
pub fn failure(context: &str, err: &dyn Display) {
    if is_json() {
        let _ = print(&FailureOut { ok: false, context, error: err.to_string() });
        return;
    }
    let mut errout = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
    let _ = errout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = writeln!(errout, "{context}: {err}");
    let _ = errout.reset();
}

pub fn spinner(msg: &'static str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice(io::stdout().is_terminal()))
}

fn color_choice(tty: bool) -> ColorChoice {
    if tty { ColorChoice::Auto } else { ColorChoice::Never }
}
