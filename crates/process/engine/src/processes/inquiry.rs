//! The `default-inquiry` process
//!
//! Free messaging without payment: a single transition into a single state.
//! Listings using this process never reach checkout.

use crate::definition::{ProcessDefinition, ProcessName, TransitionSpec};
use process_types::ActorRole;

pub const NAME: &str = "default-inquiry";

pub mod states {
    pub const FREE_INQUIRY: &str = "free-inquiry";
}

pub mod transitions {
    pub const INQUIRE_WITHOUT_PAYMENT: &str = "transition/inquire-without-payment";
}

pub fn definition() -> ProcessDefinition {
    ProcessDefinition::new(ProcessName::new(NAME))
        .with_state(states::FREE_INQUIRY)
        .with_transition(TransitionSpec::initial(
            transitions::INQUIRE_WITHOUT_PAYMENT,
            states::FREE_INQUIRY,
            ActorRole::Customer,
        ))
}
