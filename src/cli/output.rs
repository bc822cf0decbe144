use colored::Colorize;

use crate::cli::context;

/// Print a success message.
pub fn success(msg: &str) {
    if !context::verbosity().quiet {
        println!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if !context::verbosity().quiet {
        println!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if !context::verbosity().quiet {
        println!("\n{}", msg.bold());
    }
}

/// Print a detail line, only with `--verbose`.
pub fn detail(msg: &str) {
    if context::verbosity().verbose {
        println!("    {}", msg.dimmed());
    }
}

/// Print a plain indented line.
pub fn line(msg: &str) {
    if !context::verbosity().quiet {
        println!("  {msg}");
    }
}

/// Print the final result. Shown even in quiet mode.
pub fn result(value: &str) {
    if context::verbosity().quiet {
        println!("{value}");
    } else {
        println!("  {}", value.green().bold());
    }
}
