use indexmap::IndexMap;

use crate::core::ItemId;
use crate::render::ItemVisual;

/// Outcome of reconciling the scene against a fresh set of visuals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneDiff {
    pub created: Vec<ItemId>,
    pub updated: Vec<ItemId>,
    pub removed: Vec<ItemId>,
}

/// Retained item visuals keyed by item id, in draw order.
///
/// A visual survives every reconciliation in which its id is still present;
/// geometry and text are rewritten in place.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    visuals: IndexMap<ItemId, ItemVisual>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts `visuals` by id and drops every visual whose id is absent.
    ///
    /// Draw order follows `visuals`. When an id repeats, the later visual
    /// wins and keeps the first position.
    pub fn reconcile(&mut self, visuals: impl IntoIterator<Item = ItemVisual>) -> SceneDiff {
        let mut diff = SceneDiff::default();
        let mut next = IndexMap::with_capacity(self.visuals.len());

        for visual in visuals {
            let id = visual.id.clone();
            if !next.contains_key(&id) {
                if self.visuals.shift_remove(&id).is_some() {
                    diff.updated.push(id.clone());
                } else {
                    diff.created.push(id.clone());
                }
            }
            next.insert(id, visual);
        }

        diff.removed = self.visuals.drain(..).map(|(id, _)| id).collect();
        self.visuals = next;
        diff
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ItemVisual> {
        self.visuals.get(id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut ItemVisual> {
        self.visuals.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemVisual> {
        self.visuals.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Topmost visual under a plot-local point (later draws win).
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&ItemVisual> {
        self.visuals
            .values()
            .rev()
            .find(|visual| visual.rect.contains(x, y))
    }

    pub fn clear(&mut self) {
        self.visuals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::core::ItemId;
    use crate::render::{Color, ItemVisual, RectPrimitive, TextHAlign, TextPrimitive};

    fn visual(id: i64, x: f64) -> ItemVisual {
        ItemVisual {
            id: ItemId::Int(id),
            rect: RectPrimitive::new(x, 0.0, 10.0, 35.0),
            label: TextPrimitive::new("", x + 5.0, 17.5, 11.0, Color::WHITE, TextHAlign::Center),
            class: "success".to_owned(),
        }
    }

    #[test]
    fn reconcile_reports_created_updated_removed() {
        let mut scene = Scene::new();
        let first = scene.reconcile([visual(1, 0.0), visual(2, 20.0)]);
        assert_eq!(first.created, vec![ItemId::Int(1), ItemId::Int(2)]);

        let second = scene.reconcile([visual(2, 40.0), visual(3, 60.0)]);
        assert_eq!(second.created, vec![ItemId::Int(3)]);
        assert_eq!(second.updated, vec![ItemId::Int(2)]);
        assert_eq!(second.removed, vec![ItemId::Int(1)]);
        assert_eq!(scene.get(&ItemId::Int(2)).map(|v| v.rect.x), Some(40.0));
        assert_eq!(scene.len(), 2);

        scene.reconcile([visual(3, 60.0), visual(2, 40.0)]);
        let order: Vec<_> = scene.iter().map(|v| v.id.clone()).collect();
        assert_eq!(order, vec![ItemId::Int(3), ItemId::Int(2)]);
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let mut scene = Scene::new();
        scene.reconcile([visual(1, 0.0), visual(2, 5.0)]);
        assert_eq!(scene.hit_test(7.0, 10.0).map(|v| v.id.clone()), Some(ItemId::Int(2)));
        assert_eq!(scene.hit_test(2.0, 10.0).map(|v| v.id.clone()), Some(ItemId::Int(1)));
        assert!(scene.hit_test(50.0, 10.0).is_none());
    }
}
