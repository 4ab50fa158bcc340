use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://\S+$").unwrap());
static BARE_WWW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^www\.\S+$").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    Url(String),
    EmailFile(PathBuf),
    EmailText(String),
}

pub fn detect_input(input: &str) -> InputType {
    let trimmed = input.trim();

    if URL_SCHEME_RE.is_match(trimmed) || BARE_WWW_RE.is_match(trimmed) {
        return InputType::Url(trimmed.to_string());
    }

    if !trimmed.is_empty() && Path::new(trimmed).is_file() {
        return InputType::EmailFile(PathBuf::from(trimmed));
    }

    // Pasted text goes out exactly as typed.
    InputType::EmailText(input.to_string())
}

/// Lines of a batch file that name something to scan.
pub fn parse_batch(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
