use super::payload::{filled_slots, Font};

/// What the engraving will read, rendered in the chosen font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub text: String,
    pub font: Font,
}

/// `None` until at least one slot has a non-blank name.
pub fn preview(slots: &[String], font: Font) -> Option<Preview> {
    let filled: Vec<&str> = filled_slots(slots).collect();
    if filled.is_empty() {
        return None;
    }
    Some(Preview {
        text: filled.join(", "),
        font,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_joins_filled_slots() {
        let slots = vec!["Ann".to_string(), "".to_string(), "Ray".to_string()];
        let preview = preview(&slots, Font::GreatVibes).unwrap();
        assert_eq!(preview.text, "Ann, Ray");
        assert_eq!(preview.font, Font::GreatVibes);
    }

    #[test]
    fn test_preview_absent_when_all_blank() {
        let slots = vec![" ".to_string(), "".to_string()];
        assert!(preview(&slots, Font::default()).is_none());
    }
}
