//! Transaction Process Engine
//!
//! The marketplace backend drives every transaction through a **process**:
//! a named workflow variant whose states and transitions form a directed
//! graph. The backend owns the transitions; this engine replays the
//! resulting transition log against a [`ProcessDefinition`] to answer
//! state-machine questions on the client side.
//!
//! # Architecture
//!
//! - [`ProcessDefinition`] — An immutable, declarative state graph: states,
//!   transitions with source/destination and declared actor, and the
//!   offer-bearing markers used by negotiation processes.
//! - [`ProcessRegistry`] — Maps process names to definitions. Built once at
//!   startup ([`ProcessRegistry::builtin`]) and never mutated; an unknown
//!   process name is `None`, not an error.
//! - Query methods on [`ProcessDefinition`] — `current_state`,
//!   `has_passed_state`, `actor_may`, and the negotiation extensions for
//!   aligning out-of-band offers with the transition log.
//! - [`processes`] — The built-in catalogue: `default-purchase`,
//!   `default-booking`, `default-inquiry`, `default-negotiation`.
//!
//! # Key Principle
//!
//! **The engine queries, it never transitions.** Transition logs come from
//! the marketplace API and are read-only input; every query is a pure
//! function over a definition and a transaction.
//!
//! # Example
//!
//! ```rust
//! use process_engine::{processes, ProcessRegistry};
//! use process_types::{ActorRole, Transaction, TransitionLogEntry};
//!
//! let registry = ProcessRegistry::builtin().unwrap();
//! let process = registry.get(processes::purchase::NAME).unwrap();
//!
//! let tx = Transaction::from_log(
//!     processes::purchase::NAME,
//!     1,
//!     vec![
//!         TransitionLogEntry::new(
//!             processes::purchase::transitions::REQUEST_PAYMENT,
//!             ActorRole::Customer,
//!         ),
//!         TransitionLogEntry::new(
//!             processes::purchase::transitions::CONFIRM_PAYMENT,
//!             ActorRole::Customer,
//!         ),
//!     ],
//! );
//!
//! let state = process.current_state(&tx).unwrap();
//! assert_eq!(state.as_str(), processes::purchase::states::PURCHASED);
//! assert!(process.has_passed_state(processes::purchase::states::PENDING_PAYMENT, &tx));
//! ```

#![deny(unsafe_code)]

mod definition;
mod negotiation;
mod query;
mod registry;

pub mod processes;

pub use definition::{ProcessDefinition, ProcessName, TransitionSource, TransitionSpec};
pub use registry::ProcessRegistry;

// Re-export the domain types callers need alongside the engine
pub use process_types::{
    ActorRole, Offer, ProcessError, ProcessResult, StateName, Transaction, TransactionAttributes,
    TransactionId, TransitionLogEntry, TransitionName,
};
