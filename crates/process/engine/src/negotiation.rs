//! Negotiation extensions: offer-pending states and offer alignment
//!
//! Negotiation processes carry a monetary offer on some transitions. The
//! amounts arrive out-of-band from the transition log, as an `offers` array
//! that must align positionally with the log's offer-bearing subsequence.
//!
//! The policy throughout is best effort, never corrupt: a malformed offers
//! array is reported as invalid and the authoritative transition log is
//! returned untouched, but nothing here panics or errors on bad input.

use crate::definition::ProcessDefinition;
use process_types::{Offer, TransitionLogEntry};

impl ProcessDefinition {
    /// Whether the given state name is an offer-pending negotiation state
    ///
    /// Accepts a bare or `state/`-prefixed name. Malformed input (empty,
    /// a lone `/`, leading or trailing slash) is false, never an error —
    /// UI code probes this with arbitrary strings.
    pub fn is_negotiation_state(&self, state: &str) -> bool {
        self.offer_pending_states
            .iter()
            .any(|s| s.same_state(state))
    }

    /// Whether a log entry's transition is declared offer-bearing here
    pub fn carries_offer(&self, entry: &TransitionLogEntry) -> bool {
        self.transition(&entry.transition)
            .map(|spec| spec.carries_offer)
            .unwrap_or(false)
    }

    /// The offer-bearing subsequence of a transition log, in log order
    pub fn filter_offer_transitions<'a>(
        &self,
        transitions: &'a [TransitionLogEntry],
    ) -> Vec<&'a TransitionLogEntry> {
        transitions
            .iter()
            .filter(|entry| self.carries_offer(entry))
            .collect()
    }

    /// Whether `offers` aligns with the log's offer-bearing subsequence
    ///
    /// Valid iff the offers array is present, has the same length as the
    /// offer-bearing subsequence, and every position matches on transition
    /// name and actor. Order-sensitive, index-aligned; amounts are not
    /// compared. A log with no offer-bearing entries accepts only `[]`.
    pub fn is_valid_offers(
        &self,
        transitions: &[TransitionLogEntry],
        offers: Option<&[Offer]>,
    ) -> bool {
        let Some(offers) = offers else {
            return false;
        };
        let filtered = self.filter_offer_transitions(transitions);
        filtered.len() == offers.len()
            && filtered
                .iter()
                .zip(offers)
                .all(|(entry, offer)| {
                    entry.transition == offer.transition && entry.by == offer.by
                })
    }

    /// Zip `offers` onto the log's offer-bearing entries.
    ///
    /// Returns a new vector, same length and order as `transitions`, where
    /// each offer-bearing entry gains the `offer_in_subunits` of the
    /// correspondingly-positioned offer. Non-offer-bearing entries pass
    /// through unmodified.
    ///
    /// If the offers array does not validate against the log, the result is
    /// a value-equal copy of `transitions`: a malformed side channel must
    /// never taint the authoritative log. The input is never mutated, and
    /// re-applying the same valid offers yields the same result.
    pub fn transitions_with_matching_offers(
        &self,
        transitions: &[TransitionLogEntry],
        offers: Option<&[Offer]>,
    ) -> Vec<TransitionLogEntry> {
        if !self.is_valid_offers(transitions, offers) {
            return transitions.to_vec();
        }
        // Validation guarantees offers is present and positionally aligned
        let mut remaining = offers.unwrap_or_default().iter();
        transitions
            .iter()
            .map(|entry| {
                let mut entry = entry.clone();
                if self.carries_offer(&entry) {
                    if let Some(offer) = remaining.next() {
                        entry.offer_in_subunits = Some(offer.offer_in_subunits);
                    }
                }
                entry
            })
            .collect()
    }
}
