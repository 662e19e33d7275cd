//! Text rendering shared by [`ServerConfig`](crate::ServerConfig) and
//! [`ClientConfig`](crate::ClientConfig).
//!
//! Pretty output always carries ANSI styling, whether or not the output is a
//! terminal: labels in bold bright cyan, values in white.

use std::fmt::Write;

use console::Style;

/// 16-color bright cyan (SGR 96); `console` renders `.bright()` as `38;5;14`.
const BRIGHT_CYAN: &str = "\x1b[96m";

fn label_style() -> Style {
    Style::new().bold().force_styling(true)
}

/// `ESC[96m ESC[1m <text> ESC[0m`
fn styled_label(text: &str) -> String {
    format!("{}{}", BRIGHT_CYAN, label_style().apply_to(text))
}

fn value_style() -> Style {
    Style::new().white().force_styling(true)
}

/// `<prefix><label>: <value>\n`, written even when `value` is empty.
pub(crate) fn plain_field(out: &mut String, prefix: &str, label: &str, value: &str) {
    let _ = writeln!(out, "{}{}: {}", prefix, label, value);
}

/// Styled `<label>: <value>` line; nothing is written for an empty value.
pub(crate) fn pretty_field(out: &mut String, prefix: &str, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        "{}{}{}",
        prefix,
        styled_label(&format!("{}: ", label)),
        value_style().apply_to(value)
    );
}

/// Styled section header, e.g. `Servers:`.
pub(crate) fn pretty_header(out: &mut String, prefix: &str, label: &str) {
    let _ = writeln!(out, "{}{}", prefix, styled_label(&format!("{}:", label)));
}
