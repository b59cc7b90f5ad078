// Terminal UI for the gate: banner, status lines, detail tables and the wait spinner

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Failure,
    Info,
    Warning,
}

impl Tone {
    fn symbol(self) -> &'static str {
        match self {
            Tone::Success => "✅",
            Tone::Failure => "❌",
            Tone::Info => "ℹ️ ",
            Tone::Warning => "⚠️ ",
        }
    }

    fn paint(self, line: String) -> ColoredString {
        match self {
            Tone::Success => line.bright_green().bold(),
            Tone::Failure => line.bright_red().bold(),
            Tone::Info => line.bright_cyan(),
            Tone::Warning => line.bright_yellow(),
        }
    }
}

fn status_line(tone: Tone, message: &str) -> String {
    format!("{} {}", tone.symbol(), message)
}

/// Banner lines sized to the longest of title and subject
fn banner_lines(title: &str, subject: &str) -> Vec<String> {
    let width = title.chars().count().max(subject.chars().count()) + 4;
    let rule = "─".repeat(width);
    vec![
        format!("┌{}┐", rule),
        format!("│  {:<w$}  │", title, w = width - 4),
        format!("│  {:<w$}  │", subject, w = width - 4),
        format!("└{}┘", rule),
    ]
}

/// Two-column "label: value" block with aligned values
pub fn details_block(fields: &[(&str, String)]) -> String {
    let label_width = fields
        .iter()
        .map(|(label, _)| label.chars().count() + 1)
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .map(|(label, value)| {
            let label = format!("{}:", label);
            format!("  {:<w$} {}", label, value, w = label_width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_header(title: &str, subject: &str) {
    println!();
    for line in banner_lines(title, subject) {
        println!("{}", line.bright_blue());
    }
    println!();
}

pub fn print_details(fields: &[(&str, String)]) {
    println!("{}", details_block(fields));
}

pub fn print_success(message: &str) {
    println!("{}", Tone::Success.paint(status_line(Tone::Success, message)));
}

pub fn print_error(message: &str) {
    eprintln!("{}", Tone::Failure.paint(status_line(Tone::Failure, message)));
}

pub fn print_info(message: &str) {
    println!("{}", Tone::Info.paint(status_line(Tone::Info, message)));
}

pub fn print_warning(message: &str) {
    println!("{}", Tone::Warning.paint(status_line(Tone::Warning, message)));
}

/// Spinner shown while blocking on the workload
///
/// Draws to stderr and stays hidden when stderr is not a terminal.
pub fn wait_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
