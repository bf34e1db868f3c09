//! Presentation rules for the event card.
//!
//! The card scales its text and padding in three tiers depending on how many
//! slots the selection covers, and shifts by a small margin that depends on
//! the drag direction.

use super::selection::DragDirection;

/// Placeholder title shown on every new card
pub const DEFAULT_EVENT_NAME: &str = "Event name";

/// Font size the label starts from when the card appears
pub const ENTRY_FONT_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLayout {
    /// Range on one line, event name on its own line below
    Stacked,
    /// `"<range>, <name>"` on a single line
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub font_size: f32,
    /// Applied above and below the label
    pub padding_y: f32,
    pub layout: LabelLayout,
    /// Offset applied to the card's top edge
    pub margin_top: f32,
}

impl CardStyle {
    pub fn for_span(slots_spanned: usize, direction: DragDirection) -> Self {
        let (font_size, padding_y, layout) = if slots_spanned > 2 {
            (13.0, 6.0, LabelLayout::Stacked)
        } else if slots_spanned > 1 {
            (12.0, 8.0, LabelLayout::Inline)
        } else {
            (ENTRY_FONT_SIZE, 1.0, LabelLayout::Inline)
        };

        Self {
            font_size,
            padding_y,
            layout,
            margin_top: Self::margin_for(direction),
        }
    }

    pub fn margin_for(direction: DragDirection) -> f32 {
        match direction {
            DragDirection::Down => -4.0,
            DragDirection::Up => 6.0,
        }
    }
}

/// Text runs of the card label: the plain range and the bold name part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub range: String,
    pub name: String,
    pub layout: LabelLayout,
}

impl CardText {
    pub fn new(range: &str, event_name: &str, layout: LabelLayout) -> Self {
        let name = match layout {
            LabelLayout::Stacked => event_name.to_string(),
            LabelLayout::Inline => format!(", {event_name}"),
        };
        Self {
            range: range.to_string(),
            name,
            layout,
        }
    }

    /// Flattened label, mostly for logging and tests
    pub fn plain(&self) -> String {
        match self.layout {
            LabelLayout::Stacked => format!("{}\n{}", self.range, self.name),
            LabelLayout::Inline => format!("{}{}", self.range, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 10.0, 1.0, LabelLayout::Inline ; "empty span is compact")]
    #[test_case(1, 10.0, 1.0, LabelLayout::Inline ; "single slot is compact")]
    #[test_case(2, 12.0, 8.0, LabelLayout::Inline ; "two slots use middle tier")]
    #[test_case(3, 13.0, 6.0, LabelLayout::Stacked ; "three slots stack the name")]
    #[test_case(12, 13.0, 6.0, LabelLayout::Stacked ; "long spans stay in top tier")]
    fn test_tiers(slots: usize, font: f32, padding: f32, layout: LabelLayout) {
        let style = CardStyle::for_span(slots, DragDirection::Down);
        assert_eq!(style.font_size, font);
        assert_eq!(style.padding_y, padding);
        assert_eq!(style.layout, layout);
    }

    #[test]
    fn test_margin_follows_direction() {
        assert_eq!(CardStyle::for_span(3, DragDirection::Down).margin_top, -4.0);
        assert_eq!(CardStyle::for_span(3, DragDirection::Up).margin_top, 6.0);
    }

    #[test]
    fn test_card_text_layouts() {
        let inline = CardText::new("1 PM - 1:15 PM", DEFAULT_EVENT_NAME, LabelLayout::Inline);
        assert_eq!(inline.plain(), "1 PM - 1:15 PM, Event name");

        let stacked = CardText::new("1 PM - 2 PM", DEFAULT_EVENT_NAME, LabelLayout::Stacked);
        assert_eq!(stacked.name, "Event name");
        assert_eq!(stacked.plain(), "1 PM - 2 PM\nEvent name");
    }
}
