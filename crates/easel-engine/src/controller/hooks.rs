use crate::pipeline::PassReport;
use crate::time::FrameTime;

use super::Commands;

/// Summary of one rendered frame, passed to [`ControllerHooks::on_update`].
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub time: FrameTime,
    pub pass: PassReport,
    /// Frames rendered so far, this one included.
    pub frames: u64,
}

/// Application callbacks. Both default to no-ops.
pub trait ControllerHooks: 'static {
    /// Called by `start`, before the first frame.
    fn on_start(&mut self, commands: &mut Commands) {
        let _ = commands;
    }

    /// Called after every frame, once the next tick is scheduled.
    fn on_update(&mut self, frame: &FrameReport, commands: &mut Commands) {
        let _ = (frame, commands);
    }
}

pub(crate) struct NoHooks;

impl ControllerHooks for NoHooks {}
