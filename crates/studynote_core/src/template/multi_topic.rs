//! Multi-topic structured outline.
//!
//! # Responsibility
//! - Tokenize a delimited topic list.
//! - Render six fixed sections with one generated line per topic.
//! - Derive a suggested title from subject and leading topics.
//!
//! # Invariants
//! - Topic order follows input order; empty entries are discarded.
//! - Every per-topic section has exactly `topics.len()` lines.
//! - `Summary` always has one fixed line.

use super::{TemplateResult, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Level label used when the form leaves it blank.
pub const DEFAULT_LEVEL: &str = "High School";
/// Style label used when the form leaves it blank.
pub const DEFAULT_STYLE: &str = "Bulleted";
/// Tone label used when the form leaves it blank.
pub const DEFAULT_TONE: &str = "Concise";

const TITLE_TOPIC_COUNT: usize = 3;
const TITLE_TOPIC_SEPARATOR: &str = " / ";
const SUMMARY_LINE: &str = "Revisit these notes tomorrow and test yourself without looking.";

static TOPIC_DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\n]").expect("valid topic delimiter regex"));

/// Rendering target for the outline body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineFormat {
    /// Markdown-flavoured plain text.
    #[default]
    PlainText,
    /// HTML fragment with `<h2>` sections and `<ul>` lists.
    Html,
}

/// Form fields for the multi-topic outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiTopicRequest {
    pub subject: String,
    /// Raw topic list, delimited by comma, semicolon or newline.
    pub topics: String,
    pub level: String,
    pub style: String,
    pub tone: String,
    pub format: OutlineFormat,
}

impl MultiTopicRequest {
    /// Simplified form: default level/style/tone, plain-text output.
    pub fn new(subject: impl Into<String>, topics: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            topics: topics.into(),
            level: DEFAULT_LEVEL.to_string(),
            style: DEFAULT_STYLE.to_string(),
            tone: DEFAULT_TONE.to_string(),
            format: OutlineFormat::PlainText,
        }
    }
}

/// Generated outline plus the resolved inputs used to build it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOutline {
    /// `"{subject}: {t1 / t2 / t3}"`.
    pub title: String,
    pub body: String,
    pub subject: String,
    /// Parsed topic list in input order.
    pub topics: Vec<String>,
    pub level: String,
    pub style: String,
    pub tone: String,
}

impl GeneratedOutline {
    /// Metadata labels in tag order: subject, level, style, tone.
    pub fn metadata_labels(&self) -> [&str; 4] {
        [
            self.subject.as_str(),
            self.level.as_str(),
            self.style.as_str(),
            self.tone.as_str(),
        ]
    }
}

struct Section {
    heading: &'static str,
    lines: Vec<String>,
}

/// Splits a raw topic list on comma, semicolon or newline.
///
/// Entries are trimmed; empty entries are discarded.
pub fn parse_topics(raw: &str) -> Vec<String> {
    TOPIC_DELIMITER_RE
        .split(raw)
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the multi-topic outline.
///
/// # Errors
/// - `ValidationError::MissingField("subject")` when subject is blank.
/// - `ValidationError::NoTopics` when the topic list tokenizes to nothing.
pub fn generate_multi_topic_note(request: &MultiTopicRequest) -> TemplateResult<GeneratedOutline> {
    let subject = request.subject.trim();
    if subject.is_empty() {
        return Err(ValidationError::MissingField("subject"));
    }
    let topics = parse_topics(&request.topics);
    if topics.is_empty() {
        return Err(ValidationError::NoTopics);
    }

    let level = label_or_default(&request.level, DEFAULT_LEVEL);
    let style = label_or_default(&request.style, DEFAULT_STYLE);
    let tone = label_or_default(&request.tone, DEFAULT_TONE);

    let title = format!(
        "{subject}: {}",
        topics
            .iter()
            .take(TITLE_TOPIC_COUNT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(TITLE_TOPIC_SEPARATOR)
    );
    let meta_line = format!("Level: {level} | Style: {style} | Tone: {tone}");
    let sections = build_sections(subject, &level, &topics);

    let body = match request.format {
        OutlineFormat::PlainText => render_plain(&title, &meta_line, &sections),
        OutlineFormat::Html => render_html(&title, &meta_line, &sections),
    };

    Ok(GeneratedOutline {
        title,
        body,
        subject: subject.to_string(),
        topics,
        level,
        style,
        tone,
    })
}

fn label_or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn build_sections(subject: &str, level: &str, topics: &[String]) -> Vec<Section> {
    vec![
        Section {
            heading: "Key definitions",
            lines: per_topic(topics, |topic| format!("{topic}: [write a one-sentence definition]")),
        },
        Section {
            heading: "Core concepts",
            lines: per_topic(topics, |topic| {
                format!("Explain how {topic} works and why it matters in {subject}.")
            }),
        },
        Section {
            heading: "Examples",
            lines: per_topic(topics, |topic| {
                format!("Give one {level} example that shows {topic} in action.")
            }),
        },
        Section {
            heading: "Common mistakes",
            lines: per_topic(topics, |topic| {
                format!("Watch out: do not confuse {topic} with similar ideas.")
            }),
        },
        Section {
            heading: "Quick Q&A",
            lines: per_topic(topics, |topic| format!("Q: What is the key idea behind {topic}?")),
        },
        Section {
            heading: "Summary",
            lines: vec![SUMMARY_LINE.to_string()],
        },
    ]
}

fn per_topic(topics: &[String], line: impl Fn(&str) -> String) -> Vec<String> {
    topics.iter().map(|topic| line(topic)).collect()
}

fn render_plain(title: &str, meta_line: &str, sections: &[Section]) -> String {
    let mut out = format!("{title}\n{meta_line}\n");
    for section in sections {
        out.push_str(&format!("\n## {}\n", section.heading));
        for line in &section.lines {
            out.push_str(&format!("- {line}\n"));
        }
    }
    out
}

fn render_html(title: &str, meta_line: &str, sections: &[Section]) -> String {
    let mut out = format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        escape_html(title),
        escape_html(meta_line)
    );
    for section in sections {
        out.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape_html(section.heading)));
        for line in &section.lines {
            out.push_str(&format!("<li>{}</li>\n", escape_html(line)));
        }
        out.push_str("</ul>\n");
    }
    out
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, label_or_default, parse_topics};

    #[test]
    fn parse_topics_handles_mixed_delimiters() {
        let topics = parse_topics(" Atoms ;Bonds\n\n, Moles ,");
        assert_eq!(topics, vec!["Atoms", "Bonds", "Moles"]);
    }

    #[test]
    fn blank_labels_fall_back_to_defaults() {
        assert_eq!(label_or_default("   ", "Concise"), "Concise");
        assert_eq!(label_or_default(" Grade 9 ", "High School"), "Grade 9");
    }

    #[test]
    fn escape_html_escapes_markup_characters() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
