use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    /// Caller supplied a value of the wrong type or outside its accepted range.
    ///
    /// Operations returning this error leave the chart unchanged.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The rendering backend rejected a frame or failed to draw it.
    #[error("render failed: {0}")]
    Render(String),
}
