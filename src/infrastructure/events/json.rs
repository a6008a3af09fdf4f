//! JSON Event Sink
//!
//! Streams lint events as NDJSON, one object per line, for CI and editor
//! integrations. Every object carries `"event"` and `"command": "lint"`.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use crate::domain::ports::{LintEvent, LintEventSink};

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Start {
        start_paths: Vec<&'a Path>,
    },
    Component {
        path: &'a Path,
        channel: &'static str,
    },
    Finding {
        component: &'a Path,
        channel: &'static str,
        message: &'a str,
    },
    TraversalComplete {
        components: usize,
    },
    Complete {
        status: &'static str,
        errors: usize,
        warnings: usize,
    },
}

#[derive(Serialize)]
struct Line<'a> {
    command: &'static str,
    #[serde(flatten)]
    record: Record<'a>,
}

/// Event sink writing NDJSON to stdout or any writer
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn emit(&self, record: Record<'_>) {
        let line = Line {
            command: "lint",
            record,
        };
        let Ok(encoded) = serde_json::to_string(&line) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", encoded);
            let _ = writer.flush();
        }
    }
}

impl LintEventSink for JsonEventSink {
    fn on_event(&self, event: LintEvent) {
        match &event {
            LintEvent::Started { start_paths } => self.emit(Record::Start {
                start_paths: start_paths.iter().map(|p| p.as_path()).collect(),
            }),
            LintEvent::ComponentVisited { path, channel } => self.emit(Record::Component {
                path,
                channel: channel.as_str(),
            }),
            LintEvent::Finding(finding) => self.emit(Record::Finding {
                component: &finding.component,
                channel: finding.channel.as_str(),
                message: &finding.message,
            }),
            LintEvent::TraversalCompleted { components } => {
                self.emit(Record::TraversalComplete {
                    components: *components,
                })
            }
            LintEvent::PostStageCompleted { errors, warnings } => self.emit(Record::Complete {
                status: if *errors == 0 { "success" } else { "failure" },
                errors: *errors,
                warnings: *warnings,
            }),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
