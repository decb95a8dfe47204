//! User-facing output abstraction.
//!
//! Store and generator logic reports through this trait instead of printing
//! directly, so the core stays testable without a terminal.

use comfy_table::Table;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use console::style;

pub trait Reporter {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn table(&self, title: Option<&str>, header: &[&str], rows: &[Vec<String>]);
}

/// Terminal reporter used by the binary.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn success(&self, message: &str) {
        println!("{}", style(message).green());
    }

    fn warn(&self, message: &str) {
        println!("{}", style(message).yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }

    fn table(&self, title: Option<&str>, header: &[&str], rows: &[Vec<String>]) {
        if let Some(title) = title {
            println!("{}", style(title).cyan().bold());
        }
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(header.to_vec());
        for row in rows {
            table.add_row(row.clone());
        }
        println!("{table}");
        println!();
    }
}
