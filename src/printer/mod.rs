//! Diagnostics output. The entry routine's own two lines are written plain
//! and byte-exact; only CLI error reporting is styled here.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Print an error chain to stderr, with a red header when stderr is a
/// terminal.
pub fn report_error(err: &anyhow::Error) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "error:".red().bold(), err);
    } else {
        eprintln!("error: {}", err);
    }
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
