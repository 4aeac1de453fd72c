use std::fmt;

/// Lifecycle of one request/response round trip.
///
/// `Done` and `Aborted` are terminal for that round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvokerState {
    #[default]
    Idle,
    Calling,
    Done,
    Aborted,
}

impl InvokerState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

impl fmt::Display for InvokerState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Calling => "calling",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        write!(f, "{}", name)
    }
}
