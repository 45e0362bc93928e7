use crate::config::ContextConfig;
use crate::finalize::{FinalizeError, FinalizeResult};
use core::sync::atomic::{AtomicU64, Ordering};
use eccel_api::{AccelFault, AccelStatus, Accelerator, Error, Job, JobKind, JobOutput, KeyConfig, KeyHandle, Result};
use eccel_common::Signature;
use zeroize::Zeroize;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Arguments recorded at start that finalize must agree with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    None,
    Keygen {
        config: KeyConfig,
        handle: Option<KeyHandle>,
    },
    Verify {
        signature: Signature,
    },
}

/// Proof that an operation was started on a particular context
///
/// Tickets cannot be cloned, so each start is finalized at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an operation that is started must be finalized"]
pub struct Ticket {
    context: u64,
    sequence: u64,
    kind: JobKind,
}

impl Ticket {
    pub fn kind(&self) -> JobKind {
        self.kind
    }

    pub fn context_id(&self) -> u64 {
        self.context
    }
}

/// A finished job together with the arguments recorded at start
#[derive(Debug)]
pub struct Completion {
    pub binding: Binding,
    pub output: JobOutput,
}

impl Completion {
    /// Wipe the output without using it
    pub fn discard(mut self) {
        self.output.zeroize();
    }
}

enum State {
    Idle,
    Pending {
        sequence: u64,
        kind: JobKind,
        binding: Binding,
    },
}

/// Exclusive owner of one accelerator
pub struct Context<A> {
    id: u64,
    accel: A,
    state: State,
    next_sequence: u64,
    config: ContextConfig,
}

impl<A: Accelerator> Context<A> {
    /// Acquire a context over an accelerator
    pub fn new(accel: A) -> Self {
        Self::with_config(accel, ContextConfig::default())
    }

    pub fn with_config(accel: A, config: ContextConfig) -> Self {
        let id = NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(context = id, "context acquired");
        Self {
            id,
            accel,
            state: State::Idle,
            next_sequence: 0,
            config,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// No operation is in flight
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Kind of the operation in flight, if any
    pub fn pending(&self) -> Option<JobKind> {
        match &self.state {
            State::Idle => None,
            State::Pending { kind, .. } => Some(*kind),
        }
    }

    pub fn accelerator(&self) -> &A {
        &self.accel
    }

    pub fn accelerator_mut(&mut self) -> &mut A {
        &mut self.accel
    }

    /// Give the accelerator back
    ///
    /// Fails, returning the context, while an operation is pending.
    pub fn try_release(self) -> core::result::Result<A, Self> {
        if self.is_idle() {
            tracing::debug!(context = self.id, "context released");
            Ok(self.accel)
        } else {
            tracing::warn!(context = self.id, "release refused while pending");
            Err(self)
        }
    }

    /// Dispatch a job and move to Pending
    pub fn dispatch(&mut self, job: Job, binding: Binding) -> Result<Ticket> {
        let kind = job.kind();
        if let State::Pending { kind: pending, .. } = &self.state {
            tracing::warn!(context = self.id, ?kind, ?pending, "start while pending");
            return Err(Error::sequence("Context::dispatch: operation already pending"));
        }

        self.accel.dispatch(job)?;

        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.state = State::Pending {
            sequence,
            kind,
            binding,
        };
        tracing::debug!(context = self.id, sequence, ?kind, "operation started");
        Ok(Ticket {
            context: self.id,
            sequence,
            kind,
        })
    }

    /// Wait for the job a ticket refers to and return its output
    ///
    /// There is no timeout. Any accelerator fault moves the context back to
    /// Idle. A ticket this context did not issue, or that does not match the
    /// pending operation, is refused and handed back in the error; the
    /// pending operation is left untouched.
    pub fn collect(&mut self, ticket: Ticket) -> FinalizeResult<Completion, Ticket> {
        let binding = match core::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {
                tracing::warn!(context = self.id, kind = ?ticket.kind, "finalize without start");
                return Err(FinalizeError::refused(
                    Error::sequence("Context::collect: no operation pending"),
                    ticket,
                ));
            }
            State::Pending {
                sequence,
                kind,
                binding,
            } => {
                if ticket.context != self.id || ticket.sequence != sequence || ticket.kind != kind {
                    tracing::warn!(
                        context = self.id,
                        ticket_context = ticket.context,
                        ?kind,
                        ticket_kind = ?ticket.kind,
                        "ticket does not match pending operation"
                    );
                    self.state = State::Pending {
                        sequence,
                        kind,
                        binding,
                    };
                    return Err(FinalizeError::refused(
                        Error::sequence("Context::collect: foreign ticket"),
                        ticket,
                    ));
                }
                binding
            }
        };

        let output = self.drain().map_err(|e| {
            tracing::warn!(context = self.id, error = %e, "operation failed");
            e
        })?;

        if output.kind() != ticket.kind {
            let mut output = output;
            output.zeroize();
            tracing::warn!(context = self.id, kind = ?ticket.kind, "accelerator returned wrong output");
            return Err(Error::hardware("Context::collect", AccelFault::NoOutput).into());
        }

        tracing::debug!(context = self.id, sequence = ticket.sequence, kind = ?ticket.kind, "operation finished");
        Ok(Completion { binding, output })
    }

    fn drain(&mut self) -> Result<JobOutput> {
        loop {
            match self.accel.poll()? {
                AccelStatus::Busy => self.config.wait(),
                AccelStatus::Done => break,
            }
        }
        self.accel.read_output()
    }
}
