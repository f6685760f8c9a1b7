use crate::interaction::InteractionState;
use crate::render::Scene;

use super::{
    chart_behavior::ChartBehaviorState, chart_model::GanttModel, chart_runtime::ChartRuntimeState,
};

/// Internal chart state used by the public facade (`GanttChart`).
#[derive(Debug)]
pub(super) struct EngineCore {
    pub(super) model: GanttModel,
    pub(super) behavior: ChartBehaviorState,
    pub(super) scene: Scene,
    pub(super) interaction: InteractionState,
    pub(super) runtime: ChartRuntimeState,
}
