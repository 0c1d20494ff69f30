//! Rendering for command results.
//!
//! Every handler funnels its output through a [`Printer`] built from the
//! global flags, so `--output`, `--color`, and `--quiet` behave the same
//! across the storefront and admin surfaces.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

/// Renders hotel and booking data in the format chosen by `--output`.
///
/// Table mode goes through the `Tabled` row structs the commands define;
/// `plain` emits one identifier per line for scripting; the structured
/// formats serialize the domain value itself, not the display rows.
pub struct Printer {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new(global: &GlobalOpts) -> Self {
        Self {
            format: global.output.clone(),
            color: color_enabled(&global.color),
            quiet: global.quiet,
        }
    }

    /// Print a collection: a rounded table of `R` rows, a structured
    /// document, or identifiers line by line.
    pub fn list<T, R>(&self, items: &[T], to_row: impl Fn(&T) -> R, id_of: impl Fn(&T) -> String)
    where
        T: Serialize,
        R: Tabled,
    {
        let rendered = match self.format {
            OutputFormat::Table => {
                let rows: Vec<R> = items.iter().map(to_row).collect();
                Table::new(rows).with(Style::rounded()).to_string()
            }
            OutputFormat::Plain => items.iter().map(&id_of).collect::<Vec<_>>().join("\n"),
            _ => self.serialize(items),
        };
        self.print(&rendered);
    }

    /// Print a single record. Table mode uses the caller's multi-line
    /// detail view since one-row tables read poorly.
    pub fn single<T: Serialize>(
        &self,
        item: &T,
        detail: impl Fn(&T) -> String,
        id_of: impl Fn(&T) -> String,
    ) {
        let rendered = match self.format {
            OutputFormat::Table => detail(item),
            OutputFormat::Plain => id_of(item),
            _ => self.serialize(item),
        };
        self.print(&rendered);
    }

    /// Print a bare serde document (configuration dumps). Table and
    /// plain modes fall back to YAML, which reads well for nested data.
    pub fn document<T: Serialize + ?Sized>(&self, value: &T) {
        let rendered = self.serialize(value);
        self.print(&rendered);
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(value).expect("value should serialize")
            }
            OutputFormat::JsonCompact => {
                serde_json::to_string(value).expect("value should serialize")
            }
            _ => serde_yaml::to_string(value).expect("value should serialize"),
        }
    }

    fn print(&self, rendered: &str) {
        if self.quiet || rendered.is_empty() {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{rendered}");
    }

    /// Status line on stderr, green when color is enabled. Suppressed
    /// by `--quiet` like everything else.
    pub fn status(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{message}");
        }
    }
}

fn color_enabled(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
    }
}
