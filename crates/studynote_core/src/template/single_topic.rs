//! Single-topic, mode-selected study outline.
//!
//! # Responsibility
//! - Render the header/body/closing skeleton for one topic.
//! - Pick exactly one canned body block by `StudyMode`.
//!
//! # Invariants
//! - Only `mode` selects the body block; `difficulty` and `name` only appear
//!   in the header.
//! - Separator lines are always `SECTION_SEPARATOR`.

use super::{TemplateResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed horizontal rule framing the study-notes section.
pub const SECTION_SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━";

const MOTIVATION_BLOCK: &str = "\n\
💡 Motivation:\n\
\"Discipline beats motivation. Study even when you don't feel like it.\"\n\
\n\
❤️ Remember:\n\
Your future self will thank you for studying today.\n";

const EXAM_BLOCK: &str = "\n\
🧪 EXAM-FOCUSED NOTES\n\
\n\
✔ Important formulas & keywords\n\
✔ Frequently asked questions\n\
✔ Time management tips\n\
✔ How to structure answers\n\
✔ Examiner expectations\n\
\n\
⚠️ Avoid careless mistakes\n";

/// Study mode selecting the canned body block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    /// Four quick bullet tips.
    #[default]
    Short,
    /// Five numbered sections with sub-bullets.
    Detailed,
    /// Fixed exam checklist.
    Exam,
}

impl StudyMode {
    /// All modes in menu order.
    pub const ALL: [StudyMode; 3] = [Self::Short, Self::Detailed, Self::Exam];

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Detailed => "detailed",
            Self::Exam => "exam",
        }
    }
}

impl Display for StudyMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyMode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "detailed" => Ok(Self::Detailed),
            "exam" => Ok(Self::Exam),
            other => Err(ValidationError::UnknownStudyMode(other.to_string())),
        }
    }
}

/// Difficulty label echoed in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(ValidationError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Form fields for the single-topic outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleTopicRequest {
    pub name: String,
    pub subject: String,
    pub topic: String,
    /// Education level, e.g. `Grade 11`.
    pub level: String,
    pub difficulty: Difficulty,
    pub mode: StudyMode,
}

impl SingleTopicRequest {
    /// Checks that every text field is filled in.
    ///
    /// Values are checked as entered (no trimming), so whitespace-only input
    /// counts as filled.
    pub fn validate(&self) -> TemplateResult<()> {
        let required = [
            ("name", self.name.as_str()),
            ("subject", self.subject.as_str()),
            ("topic", self.topic.as_str()),
            ("level", self.level.as_str()),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Suggested record title for a saved note.
    pub fn suggested_title(&self) -> String {
        format!("{}: {}", self.subject.trim(), self.topic.trim())
    }
}

/// Builds the single-topic study note body.
///
/// # Errors
/// - `ValidationError::MissingField` when name, subject, topic or level is
///   empty.
pub fn generate_single_topic_note(request: &SingleTopicRequest) -> TemplateResult<String> {
    request.validate()?;

    let header = format!(
        "\nHello {name} 👋\n\
         \n\
         📘 Subject: {subject}\n\
         🧠 Topic: {topic}\n\
         🎓 Level: {level}\n\
         📊 Difficulty: {difficulty}\n\
         📝 Study Mode: {mode}\n",
        name = request.name,
        subject = request.subject,
        topic = request.topic,
        level = request.level,
        difficulty = request.difficulty.as_str().to_uppercase(),
        mode = request.mode.as_str().to_uppercase(),
    );
    let body = body_block(request);

    Ok(format!(
        "\n{header}\n\n{sep}\n📚 STUDY NOTES\n{sep}\n{body}\n\n{sep}\n{MOTIVATION_BLOCK}\n",
        sep = SECTION_SEPARATOR,
    ))
}

fn body_block(request: &SingleTopicRequest) -> String {
    match request.mode {
        StudyMode::Short => format!(
            "\n\
             • Understand the core idea of \"{topic}\"\n\
             • Focus on key definitions\n\
             • Revise quickly with examples\n\
             • Practice 5–10 questions\n",
            topic = request.topic,
        ),
        StudyMode::Detailed => format!(
            "\n\
             1️⃣ Introduction  \n\
             - Definition and explanation of \"{topic}\"\n\
             - Why it is important in {subject}\n\
             \n\
             2️⃣ Key Concepts  \n\
             - Main principles explained simply\n\
             - Diagrams and real-life examples\n\
             \n\
             3️⃣ Deep Understanding  \n\
             - How concepts connect together\n\
             - Common mistakes students make\n\
             \n\
             4️⃣ Practice Strategy  \n\
             - Solve different types of questions\n\
             - Analyze wrong answers\n\
             \n\
             5️⃣ Revision Tips  \n\
             - Daily short revision\n\
             - Weekly full review\n",
            topic = request.topic,
            subject = request.subject,
        ),
        StudyMode::Exam => EXAM_BLOCK.to_string(),
    }
}
