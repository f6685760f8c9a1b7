use smallvec::SmallVec;

use crate::core::Item;

/// Result of one packing pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SublanePacking {
    /// `max(sublane) + 1` over all items, `0` for an empty collection.
    pub max_depth: usize,
    /// Number of stacked items per lane, indexed by lane.
    pub lane_depths: Vec<usize>,
    /// Lanes whose stack reaches `max_depth`.
    pub deepest_lanes: SmallVec<[usize; 4]>,
}

/// Assigns `sublane` to every item and reports the stacking depth.
///
/// Items sharing a lane get `0, 1, 2, …` in collection order. Time overlap is
/// not considered: two disjoint items in the same lane still stack. Items
/// whose lane lies beyond `lane_count` are packed into the last lane, which is
/// where the render cycle draws them.
pub fn pack_sublanes(items: &mut [Item], lane_count: usize) -> SublanePacking {
    if lane_count == 0 {
        for item in items.iter_mut() {
            item.sublane = 0;
        }
        return SublanePacking::default();
    }

    let last_lane = lane_count - 1;
    let mut lane_depths = vec![0usize; lane_count];
    for item in items.iter_mut() {
        let lane = item.lane.min(last_lane);
        item.sublane = lane_depths[lane];
        lane_depths[lane] += 1;
    }

    let max_depth = lane_depths.iter().copied().max().unwrap_or(0);
    let deepest_lanes = if max_depth == 0 {
        SmallVec::new()
    } else {
        lane_depths
            .iter()
            .enumerate()
            .filter(|(_, depth)| **depth == max_depth)
            .map(|(lane, _)| lane)
            .collect()
    };

    SublanePacking {
        max_depth,
        lane_depths,
        deepest_lanes,
    }
}

/// Largest lane count a chart allocates. Item lanes must stay below it.
pub const MAX_LANES: usize = 10_000;

/// Lane count implied by an item collection: `max(lane) + 1`, or `0`,
/// saturating at [`MAX_LANES`].
#[must_use]
pub fn derived_lane_count(items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| item.lane.saturating_add(1))
        .max()
        .unwrap_or(0)
        .min(MAX_LANES)
}
