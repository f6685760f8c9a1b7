use tracing::{debug, warn};

use crate::core::{Item, ItemId};
use crate::error::GanttResult;
use crate::render::Renderer;

use super::GanttChart;
use super::render_coordinator::RenderCoordinator;
use super::validation::validate_items;

impl<R: Renderer> GanttChart<R> {
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.core.model.items
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.core.model.item(id)
    }

    /// Items whose lane index equals `lane`, in collection order.
    #[must_use]
    pub fn items_by_lane(&self, lane: usize) -> Vec<&Item> {
        self.core
            .model
            .items
            .iter()
            .filter(|item| item.lane == lane)
            .collect()
    }

    /// Replaces the whole collection, re-derives lanes, sublanes and the time
    /// domain, and re-renders once.
    pub fn set_items(&mut self, items: Vec<Item>) -> GanttResult<&mut Self> {
        validate_items(&items)?;
        self.core.model.items = items;
        self.on_items_changed()?;
        Ok(self)
    }

    pub fn add_item(&mut self, item: Item) -> GanttResult<&mut Self> {
        self.add_items(vec![item])
    }

    /// Appends `items` to the collection, keeping their order.
    pub fn add_items(&mut self, items: Vec<Item>) -> GanttResult<&mut Self> {
        validate_items(&items)?;
        self.core.model.items.extend(items);
        self.on_items_changed()?;
        Ok(self)
    }

    pub(super) fn on_items_changed(&mut self) -> GanttResult<()> {
        if let Some(gesture) = self.core.interaction.take_gesture() {
            warn!(item = %gesture.item_id, "item collection replaced mid-gesture; gesture dropped");
        }
        self.core.interaction.end_pan();
        self.core.interaction.set_hovered(None);

        self.core.model.sync_lane_labels(false);
        self.pack_pass();
        self.core.model.refit_time_domain()?;
        self.core.model.apply_layout()?;
        RenderCoordinator::render(self)?;
        debug!(
            items = self.core.model.items.len(),
            lanes = self.core.model.lane_count(),
            sublanes = self.core.model.sublanes,
            "item collection changed"
        );
        Ok(())
    }
}
