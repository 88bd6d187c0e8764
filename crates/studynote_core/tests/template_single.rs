use studynote_core::template::SECTION_SEPARATOR;
use studynote_core::{
    extract_tags, generate_single_topic_note, Difficulty, SingleTopicRequest, StudyMode,
    ValidationError,
};

const SHORT_MARKER: &str = "• Focus on key definitions";
const DETAILED_MARKER: &str = "5️⃣ Revision Tips";
const EXAM_MARKER: &str = "🧪 EXAM-FOCUSED NOTES";

fn request(mode: StudyMode) -> SingleTopicRequest {
    SingleTopicRequest {
        name: "Ada".to_string(),
        subject: "Biology".to_string(),
        topic: "Cells".to_string(),
        level: "Grade 11".to_string(),
        difficulty: Difficulty::Medium,
        mode,
    }
}

fn markers_present(body: &str) -> Vec<&'static str> {
    [SHORT_MARKER, DETAILED_MARKER, EXAM_MARKER]
        .into_iter()
        .filter(|marker| body.contains(marker))
        .collect()
}

#[test]
fn generation_is_byte_identical_for_identical_input() {
    for mode in StudyMode::ALL {
        let first = generate_single_topic_note(&request(mode)).unwrap();
        let second = generate_single_topic_note(&request(mode)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn header_echoes_fields_with_upper_cased_labels() {
    let mut req = request(StudyMode::Detailed);
    req.difficulty = Difficulty::Hard;
    let body = generate_single_topic_note(&req).unwrap();

    assert!(body.contains("Hello Ada 👋"));
    assert!(body.contains("📘 Subject: Biology\n"));
    assert!(body.contains("🧠 Topic: Cells\n"));
    assert!(body.contains("🎓 Level: Grade 11\n"));
    assert!(body.contains("📊 Difficulty: HARD\n"));
    assert!(body.contains("📝 Study Mode: DETAILED\n"));
}

#[test]
fn exactly_one_body_block_is_selected_by_mode() {
    let expected = [
        (StudyMode::Short, SHORT_MARKER),
        (StudyMode::Detailed, DETAILED_MARKER),
        (StudyMode::Exam, EXAM_MARKER),
    ];
    for (mode, marker) in expected {
        let body = generate_single_topic_note(&request(mode)).unwrap();
        assert_eq!(markers_present(&body), vec![marker], "mode {mode}");
    }
}

#[test]
fn difficulty_and_name_never_change_the_body_block() {
    for mode in StudyMode::ALL {
        let baseline = markers_present(&generate_single_topic_note(&request(mode)).unwrap());
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut req = request(mode);
            req.difficulty = difficulty;
            req.name = "Someone Else".to_string();
            let body = generate_single_topic_note(&req).unwrap();
            assert_eq!(markers_present(&body), baseline);
        }
    }
}

#[test]
fn document_has_fixed_separators_and_closing_block() {
    let short = generate_single_topic_note(&request(StudyMode::Short)).unwrap();
    let exam = generate_single_topic_note(&request(StudyMode::Exam)).unwrap();

    assert_eq!(short.matches(SECTION_SEPARATOR).count(), 3);
    let frame = format!("{SECTION_SEPARATOR}\n📚 STUDY NOTES\n{SECTION_SEPARATOR}\n");
    assert!(short.contains(&frame));

    let closing = |body: &str| body.split(SECTION_SEPARATOR).last().unwrap().to_string();
    assert_eq!(closing(&short), closing(&exam));
    assert!(closing(&short).contains("Discipline beats motivation."));
}

#[test]
fn short_mode_renders_exact_tip_block() {
    let body = generate_single_topic_note(&request(StudyMode::Short)).unwrap();
    let expected = "\n• Understand the core idea of \"Cells\"\n\
                    • Focus on key definitions\n\
                    • Revise quickly with examples\n\
                    • Practice 5–10 questions\n";
    assert!(body.contains(expected));
}

#[test]
fn empty_name_refuses_generation() {
    let mut req = request(StudyMode::Short);
    req.name = String::new();
    assert_eq!(
        generate_single_topic_note(&req).unwrap_err(),
        ValidationError::MissingField("name")
    );
}

#[test]
fn every_required_field_is_checked() {
    let clear: [(&str, fn(&mut SingleTopicRequest)); 3] = [
        ("subject", |req| req.subject.clear()),
        ("topic", |req| req.topic.clear()),
        ("level", |req| req.level.clear()),
    ];
    for (field, clear_field) in clear {
        let mut req = request(StudyMode::Exam);
        clear_field(&mut req);
        assert_eq!(
            generate_single_topic_note(&req).unwrap_err(),
            ValidationError::MissingField(field)
        );
    }
}

#[test]
fn tags_from_body_are_body_word_tokens() {
    let body = generate_single_topic_note(&request(StudyMode::Detailed)).unwrap();
    let words: Vec<&str> = body
        .split(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
        .collect();
    let tags = extract_tags(&body, 8);
    assert!(!tags.is_empty());
    for tag in &tags {
        assert!(words.contains(&tag.as_str()), "tag {tag} not in body");
    }
}
