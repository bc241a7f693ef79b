//! Note builder - composes the public overview sheet

use crate::domain::entities::NoteDocument;
use crate::domain::value_objects::ScenarioMetadata;

const INCIDENT_HEADER: &str = "[事件予定]";

/// Render the note's free text
///
/// Incidents are printed in reverse of the supplied order. The editor appends
/// new incidents at the front of its list, so reversing restores day order.
pub fn render_text(metadata: &ScenarioMetadata) -> String {
    let incidents = metadata
        .incidents()
        .iter()
        .rev()
        .map(|incident| incident.line())
        .collect::<Vec<_>>()
        .join("\n");

    [
        metadata.setting_label().to_string(),
        format!(
            "ループ回数:{} 1ループ日数:{}日",
            metadata.number_of_loops(),
            metadata.days_per_loop()
        ),
        String::new(),
        metadata.extra_text().to_string(),
        String::new(),
        INCIDENT_HEADER.to_string(),
        incidents,
    ]
    .join("\n")
}

/// Build the note document for a scenario
pub fn build_note(metadata: &ScenarioMetadata) -> NoteDocument {
    NoteDocument {
        title: NoteDocument::TITLE.to_string(),
        height: "3".to_string(),
        width: "6".to_string(),
        font_size: "5".to_string(),
        text: render_text(metadata),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::IncidentEntry;

    fn metadata(incidents: Vec<IncidentEntry>) -> ScenarioMetadata {
        ScenarioMetadata::new("学校", 2, 3, "", incidents).expect("valid metadata")
    }

    #[test]
    fn test_incidents_are_reversed() {
        let text = render_text(&metadata(vec![
            IncidentEntry::new(1, "A"),
            IncidentEntry::new(2, "B"),
        ]));

        let b = text.find("2日目：B").expect("B line");
        let a = text.find("1日目：A").expect("A line");
        assert!(b < a);
    }

    #[test]
    fn test_text_layout() {
        let meta = ScenarioMetadata::new(
            "病院の夜",
            4,
            6,
            "特殊ルールなし",
            vec![IncidentEntry::new(5, "自殺"), IncidentEntry::new(2, "殺人事件")],
        )
        .expect("valid metadata");

        assert_eq!(
            render_text(&meta),
            "病院の夜\nループ回数:4 1ループ日数:6日\n\n特殊ルールなし\n\n[事件予定]\n2日目：殺人事件\n5日目：自殺"
        );
    }

    #[test]
    fn test_no_incidents_leaves_empty_block() {
        assert_eq!(
            render_text(&metadata(vec![])),
            "学校\nループ回数:2 1ループ日数:3日\n\n\n\n[事件予定]\n"
        );
    }

    #[test]
    fn test_note_constants() {
        let note = build_note(&metadata(vec![]));
        assert_eq!(note.title, "公開シート");
        assert_eq!(note.height, "3");
        assert_eq!(note.width, "6");
        assert_eq!(note.font_size, "5");
        assert_eq!(note.file_name(), "公開シート.xml");

        let document = note.to_document();
        assert_eq!(document.tag, "text-note");
        let text = document.find_data("text").expect("text element");
        assert_eq!(text.attribute("type"), Some("note"));
        assert_eq!(text.text.as_deref(), Some(note.text.as_str()));
        assert_eq!(document.find_data("fontsize").and_then(|e| e.text.as_deref()), Some("5"));
    }
}
