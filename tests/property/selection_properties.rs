// Property-based tests for slot arithmetic and drag selection
// Checks index snapping, range ordering and rectangle geometry with random inputs

use proptest::prelude::*;
use slot_calendar::models::card::{CardStyle, LabelLayout};
use slot_calendar::models::schedule::Schedule;
use slot_calendar::models::selection::DragDirection;
use slot_calendar::models::settings::TimeFormat;
use slot_calendar::services::selection::SelectionController;
use slot_calendar::services::time_format::TimeLabeler;
use slot_calendar::utils::geometry::{slot_index_for_offset, GridBounds};

const SLOT_HEIGHT: u32 = 15;

fn grid() -> GridBounds {
    GridBounds::new(0.0, Schedule::default().grid_height(SLOT_HEIGHT as f32))
}

fn controller() -> SelectionController {
    SelectionController::new(Schedule::default(), TimeFormat::TwelveHour, SLOT_HEIGHT as f32)
}

proptest! {
    /// Property: within the grid, the index is the integer quotient of offset by slot height
    #[test]
    fn prop_index_is_floor_of_offset(y in 0u32..=255) {
        let index = slot_index_for_offset(y as f32, SLOT_HEIGHT as f32, 255.0);
        prop_assert_eq!(index, (y / SLOT_HEIGHT) as usize);
    }

    /// Property: offsets outside the grid never produce an index past the bottom edge
    #[test]
    fn prop_index_stays_in_bounds(y in -10_000.0f32..10_000.0) {
        let schedule = Schedule::default();
        let grid_height = schedule.grid_height(SLOT_HEIGHT as f32);
        let index = slot_index_for_offset(y, SLOT_HEIGHT as f32, grid_height);
        prop_assert!(index <= schedule.row_count());
    }

    /// Property: range labels ignore argument order
    #[test]
    fn prop_range_is_order_independent(a in 0usize..17, b in 0usize..17, twelve in any::<bool>()) {
        let format = if twelve { TimeFormat::TwelveHour } else { TimeFormat::TwentyFourHour };
        let labeler = TimeLabeler::new(Schedule::default(), format);
        prop_assert_eq!(labeler.time_range(a, b), labeler.time_range(b, a));
    }

    /// Property: the rectangle is pinned at the anchor and sized by slot distance
    #[test]
    fn prop_rect_matches_slot_distance(a in 0u32..17, b in 0u32..17) {
        let mut controller = controller();
        let y_a = (a * SLOT_HEIGHT) as f32;
        let y_b = (b * SLOT_HEIGHT) as f32;
        controller.pointer_down(Some(grid()), Some(y_a));
        controller.pointer_move(Some(grid()), Some(y_b));

        let rect = controller.rect();
        let expected = (a.abs_diff(b) * SLOT_HEIGHT) as f32;
        prop_assert_eq!(rect.height, expected);
        prop_assert_eq!(rect.top, y_a);
        if b < a {
            prop_assert_eq!(rect.transform_y, -expected);
            prop_assert_eq!(controller.direction(), DragDirection::Up);
        } else {
            prop_assert_eq!(rect.transform_y, 0.0);
            prop_assert_eq!(controller.direction(), DragDirection::Down);
        }
        prop_assert_eq!(rect.visual_top(), y_a.min(y_b));
    }

    /// Property: pointer-up always ends the drag with a collapsed rectangle
    #[test]
    fn prop_pointer_up_collapses(moves in prop::collection::vec(-100.0f32..400.0, 0..12)) {
        let mut controller = controller();
        controller.pointer_down(Some(grid()), moves.first().copied());
        for y in &moves {
            controller.pointer_move(Some(grid()), Some(*y));
        }
        let done = controller.pointer_up();

        prop_assert!(done.is_some());
        prop_assert!(!controller.is_dragging());
        prop_assert_eq!(controller.rect().height, 0.0);
    }

    /// Property: only spans above two slots stack the event name
    #[test]
    fn prop_stacked_layout_iff_span_above_two(span in 0usize..40) {
        let style = CardStyle::for_span(span, DragDirection::Down);
        prop_assert_eq!(style.layout == LabelLayout::Stacked, span > 2);
    }
}
