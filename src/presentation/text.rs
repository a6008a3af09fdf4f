//! Default text reporter
//!
//! Buffers findings and prints them grouped by component once the post stage
//! completes: a blank line, the component path, its warnings, then its
//! errors. Continuation lines of multi-line messages are indented by two
//! spaces. A summary line closes the report.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::application::{FindingStore, LintSummary};
use crate::domain::ports::{LintEvent, LintEventSink};
use crate::domain::value_objects::Channel;

use super::theme::{colors, Icons};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    pub color: bool,
    pub unicode: bool,
    /// Drop warnings from the output
    pub quiet: bool,
}

/// Render a finished run.
pub fn render(store: &FindingStore, summary: &LintSummary, options: &TextOptions) -> String {
    let paint = |text: &str, color: Color| -> String {
        if options.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    store.for_each_non_empty(|entry| {
        let warnings: &[String] = if options.quiet { &[] } else { &entry.warnings };
        if warnings.is_empty() && entry.errors.is_empty() {
            return;
        }

        out.push('\n');
        if options.color {
            out.push_str(&entry.path.display().to_string().bold().to_string());
        } else {
            out.push_str(&entry.path.display().to_string());
        }
        out.push('\n');

        for message in warnings {
            push_message(&mut out, &paint("[warning]", colors::WARNING), message);
        }
        for message in &entry.errors {
            push_message(&mut out, &paint("[error]", colors::ERROR), message);
        }
    });

    let icons = Icons::new(options.unicode);
    let (icon, color) = if summary.errors > 0 {
        (icons.error, colors::ERROR)
    } else if summary.warnings > 0 && !options.quiet {
        (icons.warning, colors::WARNING)
    } else {
        (icons.success, colors::SUCCESS)
    };

    let counts = if options.quiet {
        format!("{} error(s)", summary.errors)
    } else {
        format!("{} error(s), {} warning(s)", summary.errors, summary.warnings)
    };
    out.push('\n');
    out.push_str(&paint(icon, color));
    out.push(' ');
    out.push_str(&counts);
    out.push_str(&paint(
        &format!(" in {} component(s)", summary.components),
        colors::DIM,
    ));
    out.push('\n');
    out
}

fn push_message(out: &mut String, label: &str, message: &str) {
    out.push_str(label);
    out.push(' ');
    out.push_str(&message.replace('\n', "\n  "));
    out.push('\n');
}

#[derive(Default)]
struct State {
    store: FindingStore,
    components: usize,
}

/// Event sink printing the grouped report at the end of the run.
pub struct TextReporter {
    options: TextOptions,
    state: Mutex<State>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextReporter {
    pub fn stdout(options: TextOptions) -> Self {
        Self::with_writer(options, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(options: TextOptions, writer: W) -> Self {
        Self {
            options,
            state: Mutex::new(State::default()),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn flush_report(&self, errors: usize, warnings: usize) {
        let rendered = match self.state.lock() {
            Ok(state) => render(
                &state.store,
                &LintSummary {
                    errors,
                    warnings,
                    components: state.components,
                },
                &self.options,
            ),
            Err(_) => return,
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(rendered.as_bytes());
            let _ = writer.flush();
        }
    }
}

impl LintEventSink for TextReporter {
    fn on_event(&self, event: LintEvent) {
        match event {
            LintEvent::Finding(finding) => {
                if self.options.quiet && finding.channel == Channel::Warning {
                    return;
                }
                if let Ok(mut state) = self.state.lock() {
                    state.store.record_finding(finding);
                }
            }
            LintEvent::TraversalCompleted { components } => {
                if let Ok(mut state) = self.state.lock() {
                    state.components = components;
                }
            }
            LintEvent::PostStageCompleted { errors, warnings } => {
                self.flush_report(errors, warnings);
            }
            LintEvent::Started { .. } | LintEvent::ComponentVisited { .. } => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
