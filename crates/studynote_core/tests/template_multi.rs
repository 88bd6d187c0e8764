use studynote_core::{
    generate_multi_topic_note, parse_topics, MultiTopicRequest, OutlineFormat, ValidationError,
};

fn section_lines<'a>(body: &'a str, heading: &str) -> Vec<&'a str> {
    body.split("\n## ")
        .find(|section| section.starts_with(heading))
        .map(|section| {
            section
                .lines()
                .skip(1)
                .filter(|line| line.starts_with("- "))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn empty_topic_entries_are_discarded() {
    let topics = parse_topics("Cell structure, Photosynthesis,, Mitosis");
    assert_eq!(topics, vec!["Cell structure", "Photosynthesis", "Mitosis"]);

    let outline =
        generate_multi_topic_note(&MultiTopicRequest::new("Biology", "Cell structure, Photosynthesis,, Mitosis"))
            .unwrap();
    assert_eq!(section_lines(&outline.body, "Key definitions").len(), 3);
}

#[test]
fn per_topic_sections_have_one_line_per_topic() {
    let request = MultiTopicRequest::new("Physics", "Velocity; Acceleration\nForce, Momentum");
    let outline = generate_multi_topic_note(&request).unwrap();

    for heading in [
        "Key definitions",
        "Core concepts",
        "Examples",
        "Common mistakes",
        "Quick Q&A",
    ] {
        let lines = section_lines(&outline.body, heading);
        assert_eq!(lines.len(), 4, "section {heading}");
        for (line, topic) in lines.iter().zip(&outline.topics) {
            assert!(line.contains(topic.as_str()), "{line} should mention {topic}");
        }
    }
    assert_eq!(section_lines(&outline.body, "Summary").len(), 1);
}

#[test]
fn sections_appear_in_fixed_order() {
    let outline = generate_multi_topic_note(&MultiTopicRequest::new("History", "Rome")).unwrap();
    let positions: Vec<usize> = [
        "## Key definitions",
        "## Core concepts",
        "## Examples",
        "## Common mistakes",
        "## Quick Q&A",
        "## Summary",
    ]
    .iter()
    .map(|heading| outline.body.find(heading).unwrap())
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn title_uses_subject_and_first_three_topics() {
    let outline =
        generate_multi_topic_note(&MultiTopicRequest::new(" Chemistry ", "Atoms, Bonds, Moles, Gases"))
            .unwrap();
    assert_eq!(outline.title, "Chemistry: Atoms / Bonds / Moles");

    let single = generate_multi_topic_note(&MultiTopicRequest::new("Chemistry", "Atoms")).unwrap();
    assert_eq!(single.title, "Chemistry: Atoms");
}

#[test]
fn blank_labels_use_simplified_defaults() {
    let request = MultiTopicRequest {
        level: " ".to_string(),
        style: String::new(),
        tone: "Friendly".to_string(),
        ..MultiTopicRequest::new("Math", "Fractions")
    };
    let outline = generate_multi_topic_note(&request).unwrap();
    assert_eq!(outline.level, "High School");
    assert_eq!(outline.style, "Bulleted");
    assert_eq!(outline.tone, "Friendly");
    assert!(outline
        .body
        .contains("Level: High School | Style: Bulleted | Tone: Friendly"));
}

#[test]
fn generation_is_deterministic() {
    let request = MultiTopicRequest::new("Biology", "Cells, Tissues");
    assert_eq!(
        generate_multi_topic_note(&request).unwrap(),
        generate_multi_topic_note(&request).unwrap()
    );
}

#[test]
fn blank_subject_or_topics_refuse_generation() {
    let no_subject = generate_multi_topic_note(&MultiTopicRequest::new("  ", "Cells"));
    assert_eq!(no_subject.unwrap_err(), ValidationError::MissingField("subject"));

    let no_topics = generate_multi_topic_note(&MultiTopicRequest::new("Biology", " ,;\n "));
    assert_eq!(no_topics.unwrap_err(), ValidationError::NoTopics);
}

#[test]
fn html_format_renders_escaped_sections() {
    let request = MultiTopicRequest {
        format: OutlineFormat::Html,
        ..MultiTopicRequest::new("Logic", "A<B, Sets")
    };
    let outline = generate_multi_topic_note(&request).unwrap();

    assert!(outline.body.starts_with("<h1>Logic: A&lt;B / Sets</h1>"));
    assert_eq!(outline.body.matches("<h2>").count(), 6);
    assert!(outline.body.contains("<h2>Quick Q&amp;A</h2>"));
    // 5 per-topic sections x 2 topics + 1 summary line
    assert_eq!(outline.body.matches("<li>").count(), 11);
    assert_eq!(outline.title, "Logic: A<B / Sets");
}
