//! Typed session tokens
//!
//! Each start returns the token for its own operation, so a sign session
//! cannot be handed to verify finalize without an explicit conversion.

use crate::context::Ticket;

macro_rules! session {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug)]
        #[must_use = "an operation that is started must be finalized"]
        pub struct $name {
            ticket: Ticket,
        }

        impl $name {
            pub fn from_ticket(ticket: Ticket) -> Self {
                Self { ticket }
            }

            pub fn into_ticket(self) -> Ticket {
                self.ticket
            }

            pub fn ticket(&self) -> &Ticket {
                &self.ticket
            }
        }
    };
}

session!(
    /// Pending key generation (ECDSA or ECDH)
    KeygenSession
);
session!(
    /// Pending ECDSA signature
    SignSession
);
session!(
    /// Pending ECDSA verification
    VerifySession
);
session!(
    /// Pending ECDH key agreement
    AgreeSession
);
