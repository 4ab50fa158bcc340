use crate::models::{Status, StatusColor};
use crate::popup::StatusLabel;
use colored::*;
use std::sync::Mutex;

/// How a terminal label writes its renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Label that prints every render to stdout, one line each.
pub struct TerminalLabel {
    id: String,
    format: OutputFormat,
    show_pending: bool,
    last: Mutex<Option<Status>>,
}

impl TerminalLabel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            format: OutputFormat::default(),
            show_pending: true,
            last: Mutex::new(None),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Skip the `Analyzing...` line, e.g. when many labels share one screen.
    pub fn hide_pending(mut self) -> Self {
        self.show_pending = false;
        self
    }
}

impl StatusLabel for TerminalLabel {
    fn id(&self) -> &str {
        &self.id
    }

    fn render(&self, status: &Status) {
        *self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(status.clone());

        if status.is_pending() && !self.show_pending {
            return;
        }
        println!("{}", format_line(&self.id, status, self.format));
    }

    fn current(&self) -> Option<Status> {
        self.last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

pub fn format_line(id: &str, status: &Status, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => {
            let tag = format!("[{}]", id);
            format!("{} {}", tag.as_str().bright_black(), paint(status))
        }
        OutputFormat::Json => serde_json::json!({
            "label": id,
            "text": status.text,
            "color": status.color.as_css(),
            "phase": status.phase(),
        })
        .to_string(),
    }
}

fn paint(status: &Status) -> ColoredString {
    let icon = match status.color {
        StatusColor::Neutral => "…",
        StatusColor::Safe => "✔",
        StatusColor::Unsafe => "✖",
        StatusColor::Warning => "⚠",
    };
    let (r, g, b) = status.color.rgb();
    let line = format!("{} {}", icon, status.text).as_str().truecolor(r, g, b);
    match status.color {
        StatusColor::Safe | StatusColor::Unsafe => line.bold(),
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanResponse;

    #[test]
    fn test_json_line_carries_css_color() {
        let status = Status::from_response(&ScanResponse::new("PHISHING", 0.81));
        let line = format_line("res-url", &status, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["label"], "res-url");
        assert_eq!(value["text"], "PHISHING (Confidence: 0.81)");
        assert_eq!(value["color"], "#c0392b");
        assert_eq!(value["phase"], "unsafe");
    }

    #[test]
    fn test_pretty_line_contains_text() {
        colored::control::set_override(false);
        let line = format_line("res-email", &Status::offline(), OutputFormat::Pretty);
        assert_eq!(line, "[res-email] ⚠ Error: Backend Offline");
    }

    #[test]
    fn test_terminal_label_remembers_hidden_pending() {
        let label = TerminalLabel::new("res-url").hide_pending();
        label.render(&Status::pending());
        assert_eq!(label.current(), Some(Status::pending()));
    }
}
