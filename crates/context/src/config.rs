//! Context configuration

/// How `finalize` waits for a busy accelerator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PollMode {
    /// Busy-wait with a spin-loop hint
    #[default]
    Spin,
    /// Yield the thread between polls
    Yield,
}

/// Runtime configuration of a [`Context`](crate::Context)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextConfig {
    pub poll: PollMode,
}

impl ContextConfig {
    pub fn with_poll(mut self, poll: PollMode) -> Self {
        self.poll = poll;
        self
    }

    pub(crate) fn wait(&self) {
        match self.poll {
            PollMode::Spin => core::hint::spin_loop(),
            PollMode::Yield => std::thread::yield_now(),
        }
    }
}
