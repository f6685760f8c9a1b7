mod axis_frame_builder;
mod axis_label_format;
mod axis_ticks;
mod chart_behavior;
mod chart_config;
mod chart_model;
mod chart_runtime;
mod drag_dispatch;
mod drag_events;
mod engine;
mod engine_accessors;
mod engine_core;
mod engine_init;
mod feature_controller;
mod interaction_controller;
mod interaction_coordinator;
mod item_layout;
mod items_controller;
mod json_contract;
mod layout_controller;
mod render_coordinator;
mod time_scale_zoom_factor_resolver;
mod tooltip_controller;
mod validation;
mod zoom_controller;

pub use chart_config::{FeatureToggles, GanttChartConfig};
pub use chart_runtime::CycleStats;
pub use drag_events::{DragCallback, DragEvent, DragEventKind};
pub use engine::GanttChart;
pub use interaction_controller::PointerTarget;
