/// Frame-loop state, with the conventional numeric codes as discriminants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[repr(u8)]
pub enum ControllerState {
    #[default]
    Preparing = 0,
    Starting = 1,
    Paused = 2,
    Ticking = 3,
    Standby = 4,
    /// Terminal; entered only by application code, never by the controller.
    Ended = 5,
}

/// What the controller did with a fired tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// A frame was rendered and the next tick scheduled.
    Rendered,
    /// A frame was still in progress; a follow-up tick was scheduled.
    Deferred,
    /// Nothing to do (paused, not started, or ended). The chain stops here.
    Idle,
}
