//! Event card drawn over the grid while a selection is in progress.
//!
//! The card fades in and grows from zero height when a drag starts, and fades
//! out when it ends. Font size and padding animate between the span tiers.

use egui::text::{LayoutJob, TextFormat};
use egui::{FontId, Id, Pos2, Rect, Rounding, Stroke, Vec2};

use super::palette::EventCardPalette;
use crate::models::card::{CardStyle, CardText, LabelLayout, ENTRY_FONT_SIZE};
use crate::models::selection::{DragDirection, EventRect};

const FADE_SECS: f32 = 0.2;
const GROW_SECS: f32 = 0.25;
const CORNER_RADIUS: f32 = 8.0;
const INNER_PADDING_X: f32 = 8.0;

/// Everything the card needs from the selection, read once per frame
#[derive(Debug, Clone)]
pub struct EventCardProps<'a> {
    pub visible: bool,
    pub rect: EventRect,
    pub label: &'a str,
    pub event_name: &'a str,
    pub direction: DragDirection,
    pub slots_spanned: usize,
}

pub(crate) fn render_event_card(
    ui: &egui::Ui,
    id: Id,
    grid: Rect,
    props: &EventCardProps<'_>,
    palette: &EventCardPalette,
) {
    let ctx = ui.ctx();
    let opacity = ctx.animate_bool_with_time(id.with("opacity"), props.visible, FADE_SECS);

    let style = CardStyle::for_span(props.slots_spanned, props.direction);
    // Hidden cards settle back to the entry tier so the next one starts small
    let (target_font, target_padding) = if props.visible {
        (style.font_size, style.padding_y)
    } else {
        (ENTRY_FONT_SIZE, 0.0)
    };

    let height = ctx.animate_value_with_time(id.with("height"), props.rect.height, GROW_SECS);
    let transform_y =
        ctx.animate_value_with_time(id.with("transform_y"), props.rect.transform_y, GROW_SECS);
    let font_size = ctx.animate_value_with_time(id.with("font"), target_font, FADE_SECS);
    let padding_y = ctx.animate_value_with_time(id.with("padding"), target_padding, FADE_SECS);

    if opacity <= 0.0 {
        return;
    }

    let top = grid.top() + props.rect.top + transform_y + style.margin_top;
    let card_rect = Rect::from_min_size(
        Pos2::new(grid.left(), top),
        Vec2::new(grid.width(), height.max(0.0)),
    );

    let palette = palette.faded(opacity);
    let painter = ui.painter().with_clip_rect(card_rect.intersect(ui.clip_rect()));
    painter.rect(
        card_rect,
        Rounding::same(CORNER_RADIUS),
        palette.fill,
        Stroke::new(1.0, palette.outline),
    );

    let text = CardText::new(props.label, props.event_name, style.layout);
    let job = label_job(&text, font_size, card_rect.width() - INNER_PADDING_X * 2.0, &palette);
    let galley = ui.fonts(|fonts| fonts.layout_job(job));
    painter.galley(
        card_rect.left_top() + Vec2::new(INNER_PADDING_X, padding_y),
        galley,
        palette.text,
    );
}

fn label_job(
    text: &CardText,
    font_size: f32,
    wrap_width: f32,
    palette: &EventCardPalette,
) -> LayoutJob {
    let font_id = FontId::proportional(font_size);
    let range_format = TextFormat {
        font_id: font_id.clone(),
        color: palette.text.gamma_multiply(0.9),
        ..Default::default()
    };
    let name_format = TextFormat {
        font_id,
        color: palette.text,
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    job.append(&text.range, 0.0, range_format.clone());
    match text.layout {
        LabelLayout::Stacked => {
            job.append("\n", 0.0, range_format);
            job.append(&text.name, 0.0, name_format);
        }
        LabelLayout::Inline => job.append(&text.name, 0.0, name_format),
    }
    job.wrap.max_width = wrap_width.max(0.0);
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_egui::theme::CalendarTheme;

    fn palette() -> EventCardPalette {
        EventCardPalette::from_theme(&CalendarTheme::light())
    }

    #[test]
    fn test_stacked_job_has_two_lines() {
        let text = CardText::new("1 PM - 2 PM", "Event name", LabelLayout::Stacked);
        let job = label_job(&text, 13.0, 200.0, &palette());
        assert_eq!(job.text, "1 PM - 2 PM\nEvent name");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.wrap.max_width, 200.0);
    }

    #[test]
    fn test_inline_job_joins_name() {
        let text = CardText::new("1 PM - 1:15 PM", "Event name", LabelLayout::Inline);
        let job = label_job(&text, 10.0, -5.0, &palette());
        assert_eq!(job.text, "1 PM - 1:15 PM, Event name");
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.wrap.max_width, 0.0);
        assert_eq!(job.sections[0].format.font_id.size, 10.0);
    }
}
