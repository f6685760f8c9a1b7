use crate::core::{Item, LaneScale, TimeScale};
use crate::render::{Color, ItemVisual, RectPrimitive, TextHAlign, TextPrimitive};

pub(super) const DEFAULT_ITEM_CLASS: &str = "success";
const ITEM_LABEL_FONT_PX: f64 = 11.0;

/// Everything needed to place an item bar in plot-local pixels.
#[derive(Debug, Clone, Copy)]
pub(super) struct ItemLayoutContext {
    pub(super) time_scale: TimeScale,
    pub(super) lane_scale: LaneScale,
    pub(super) row_height_px: f64,
    pub(super) sublanes: usize,
}

impl ItemLayoutContext {
    /// Top of the bar row for `item`: its lane top, plus its sublane offset
    /// once there is more than one sublane. Out-of-range lanes draw in the
    /// last lane.
    #[must_use]
    pub(super) fn row_top(&self, item: &Item) -> f64 {
        let lane = self.lane_scale.clamp_index(item.lane);
        let lane_top = self.lane_scale.lane_to_pixel(lane as f64);
        if self.sublanes > 1 {
            lane_top + item.sublane() as f64 * self.row_height_px
        } else {
            lane_top
        }
    }

    #[must_use]
    pub(super) fn layout(&self, item: &Item) -> ItemVisual {
        let x = self.time_scale.time_to_pixel(item.start);
        let width = self.time_scale.time_to_pixel(item.end) - x;
        let y = self.row_top(item);
        let rect = RectPrimitive::new(x, y, width, self.row_height_px);
        let label_color = item
            .fill_title
            .as_deref()
            .and_then(Color::from_hex)
            .unwrap_or(Color::WHITE);

        ItemVisual {
            id: item.id.clone(),
            rect,
            label: TextPrimitive::new(
                item.label.clone(),
                rect.center_x(),
                y + self.row_height_px / 2.0,
                ITEM_LABEL_FONT_PX,
                label_color,
                TextHAlign::Center,
            ),
            class: item
                .class
                .clone()
                .unwrap_or_else(|| DEFAULT_ITEM_CLASS.to_owned()),
        }
    }
}
