pub mod item;
pub mod lane_scale;
pub mod primitives;
pub mod scale;
pub mod sublane;
pub mod time_scale;
pub mod types;

pub use item::{Item, ItemId, Tooltip};
pub use lane_scale::LaneScale;
pub use primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
pub use scale::LinearScale;
pub use sublane::{MAX_LANES, SublanePacking, derived_lane_count, pack_sublanes};
pub use time_scale::{TimeBounds, TimeScale, data_time_extent};
pub use types::{MarginPatch, Margins, Viewport};
