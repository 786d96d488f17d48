//! Actor roles: who triggers a transition

use serde::{Deserialize, Serialize};

/// The role responsible for performing a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    /// The party buying or booking the listing
    Customer,
    /// The party providing the listing
    Provider,
    /// A marketplace operator acting on behalf of either party
    Operator,
    /// An automated, delayed transition fired by the marketplace backend
    System,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Provider => "provider",
            Self::Operator => "operator",
            Self::System => "system",
        }
    }

    /// Whether transitions by this actor happen without a user action
    pub fn is_automatic(&self) -> bool {
        matches!(self, Self::System)
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
