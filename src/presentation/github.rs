//! GitHub Actions reporter
//!
//! Streams one workflow command per finding so problems show up as
//! annotations on the component's manifest.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::entities::{Component, Finding};
use crate::domain::ports::{LintEvent, LintEventSink};
use crate::domain::value_objects::{path, Channel};

const TITLE: &str = "component-hint";

pub fn github_actions_annotation(
    channel: Channel,
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_property(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!(
        "::{}{}::{}",
        channel.as_str(),
        prop_str,
        escape_message(message)
    )
}

fn escape_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_message(s).replace(':', "%3A").replace(',', "%2C")
}

pub struct GithubReporter {
    base_dir: PathBuf,
    quiet: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl GithubReporter {
    pub fn stdout(base_dir: &Path, quiet: bool) -> Self {
        Self::with_writer(base_dir, quiet, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(base_dir: &Path, quiet: bool, writer: W) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            quiet,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn annotate(&self, finding: &Finding) {
        let manifest = Component::manifest_path(&finding.component);
        let file = path::relative_to(&self.base_dir, &manifest);
        let line = github_actions_annotation(
            finding.channel,
            &finding.message,
            Some(&file.display().to_string()),
            Some(TITLE),
        );

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl LintEventSink for GithubReporter {
    fn on_event(&self, event: LintEvent) {
        if let LintEvent::Finding(finding) = event {
            if self.quiet && finding.channel == Channel::Warning {
                return;
            }
            self.annotate(&finding);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
