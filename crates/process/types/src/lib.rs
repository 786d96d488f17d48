//! Transaction Process Domain Types
//!
//! A marketplace transaction lives inside a **process**: a server-defined
//! workflow variant (purchase, booking, inquiry, negotiation) expressed as a
//! state graph. The server is the sole producer of the transition log; this
//! crate models what it produces.
//!
//! # Key Concepts
//!
//! - **TransitionName / StateName**: opaque string identifiers. Transition
//!   names are fully qualified (`transition/confirm-payment`); state names
//!   are stored bare (`purchased`) but callers may probe with a `state/`
//!   prefix, so comparisons go through [`StateName::normalize`].
//! - **ActorRole**: who performed (or is expected to perform) a transition —
//!   customer, provider, operator, or the automated system.
//! - **TransitionLogEntry**: one recorded transition. Array order is the
//!   authoritative ordering; `created_at` is informational.
//! - **Transaction**: the slice of a marketplace transaction the process
//!   engine consumes — the process name/version, the last transition, and
//!   the full transition log.
//! - **Offer**: a monetary amount tied to a negotiation transition, supplied
//!   out-of-band from the transition log and aligned positionally.
//!
//! # Design Principles
//!
//! 1. Transition logs are read-only input. Nothing in this workspace ever
//!    mutates a transaction or its transitions.
//! 2. `last_transition` must equal the final log entry; the producer
//!    maintains this and [`Transaction::is_consistent`] exposes the check.

#![deny(unsafe_code)]

mod actor;
mod errors;
mod names;
mod transaction;

pub use actor::*;
pub use errors::*;
pub use names::*;
pub use transaction::*;
