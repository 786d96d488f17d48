//! The `default-negotiation` process
//!
//! Negotiated purchase: the customer opens with an offer, both parties may
//! counter or withdraw, and acceptance leads into the purchase flow
//! (payment, delivery, receipt, reviews).
//!
//! Offer amounts travel out-of-band from the transition log; the
//! transitions marked offer-bearing here are the ones the side-channel
//! `offers` array must align with.

use crate::definition::{ProcessDefinition, ProcessName, TransitionSpec};
use process_types::ActorRole;

pub const NAME: &str = "default-negotiation";

pub mod states {
    pub const INQUIRY: &str = "inquiry";
    /// An offer from the customer is on the table; the provider responds
    pub const OFFER_PENDING: &str = "offer-pending";
    /// A counter-offer from the provider is on the table; the customer responds
    pub const CUSTOMER_OFFER_PENDING: &str = "customer-offer-pending";
    pub const OFFER_DECLINED: &str = "offer-declined";
    pub const OFFER_EXPIRED: &str = "offer-expired";
    pub const OFFER_ACCEPTED: &str = "offer-accepted";
    pub const PENDING_PAYMENT: &str = "pending-payment";
    pub const PAYMENT_EXPIRED: &str = "payment-expired";
    pub const PURCHASED: &str = "purchased";
    pub const DELIVERED: &str = "delivered";
    pub const RECEIVED: &str = "received";
    pub const REVIEWED_BY_CUSTOMER: &str = "reviewed-by-customer";
    pub const REVIEWED_BY_PROVIDER: &str = "reviewed-by-provider";
    pub const REVIEWED: &str = "reviewed";
}

pub mod transitions {
    pub const INQUIRE_WITHOUT_PAYMENT: &str = "transition/inquire-without-payment";
    pub const MAKE_OFFER: &str = "transition/make-offer";
    pub const MAKE_OFFER_FROM_INQUIRY: &str = "transition/make-offer-from-inquiry";
    pub const PROVIDER_MAKE_COUNTER_OFFER: &str = "transition/provider-make-counter-offer";
    pub const CUSTOMER_MAKE_COUNTER_OFFER: &str = "transition/customer-make-counter-offer";
    pub const CUSTOMER_WITHDRAW_COUNTER_OFFER: &str =
        "transition/customer-withdraw-counter-offer";
    pub const PROVIDER_WITHDRAW_COUNTER_OFFER: &str =
        "transition/provider-withdraw-counter-offer";
    pub const PROVIDER_ACCEPT_OFFER: &str = "transition/provider-accept-offer";
    pub const CUSTOMER_ACCEPT_OFFER: &str = "transition/customer-accept-offer";
    pub const PROVIDER_DECLINE_OFFER: &str = "transition/provider-decline-offer";
    pub const CUSTOMER_DECLINE_OFFER: &str = "transition/customer-decline-offer";
    pub const EXPIRE_OFFER: &str = "transition/expire-offer";
    pub const EXPIRE_COUNTER_OFFER: &str = "transition/expire-counter-offer";
    pub const REQUEST_PAYMENT: &str = "transition/request-payment";
    pub const CONFIRM_PAYMENT: &str = "transition/confirm-payment";
    pub const EXPIRE_PAYMENT: &str = "transition/expire-payment";
    pub const MARK_DELIVERED: &str = "transition/mark-delivered";
    pub const MARK_RECEIVED: &str = "transition/mark-received";
    pub const AUTO_MARK_RECEIVED: &str = "transition/auto-mark-received";
    pub const REVIEW_1_BY_CUSTOMER: &str = "transition/review-1-by-customer";
    pub const REVIEW_1_BY_PROVIDER: &str = "transition/review-1-by-provider";
    pub const REVIEW_2_BY_CUSTOMER: &str = "transition/review-2-by-customer";
    pub const REVIEW_2_BY_PROVIDER: &str = "transition/review-2-by-provider";
    pub const EXPIRE_REVIEW_PERIOD: &str = "transition/expire-review-period";
    pub const EXPIRE_CUSTOMER_REVIEW_PERIOD: &str = "transition/expire-customer-review-period";
    pub const EXPIRE_PROVIDER_REVIEW_PERIOD: &str = "transition/expire-provider-review-period";
}

pub fn definition() -> ProcessDefinition {
    use states::*;
    use transitions::*;
    use ActorRole::{Customer, Provider, System};

    ProcessDefinition::new(ProcessName::new(NAME))
        .with_state(INQUIRY)
        .with_state(OFFER_PENDING)
        .with_state(CUSTOMER_OFFER_PENDING)
        .with_state(OFFER_DECLINED)
        .with_state(OFFER_EXPIRED)
        .with_state(OFFER_ACCEPTED)
        .with_state(PENDING_PAYMENT)
        .with_state(PAYMENT_EXPIRED)
        .with_state(PURCHASED)
        .with_state(DELIVERED)
        .with_state(RECEIVED)
        .with_state(REVIEWED_BY_CUSTOMER)
        .with_state(REVIEWED_BY_PROVIDER)
        .with_state(REVIEWED)
        .with_offer_pending(OFFER_PENDING)
        .with_offer_pending(CUSTOMER_OFFER_PENDING)
        .with_transition(TransitionSpec::initial(
            INQUIRE_WITHOUT_PAYMENT,
            INQUIRY,
            Customer,
        ))
        .with_transition(
            TransitionSpec::initial(MAKE_OFFER, OFFER_PENDING, Customer).with_offer(),
        )
        .with_transition(
            TransitionSpec::new(MAKE_OFFER_FROM_INQUIRY, INQUIRY, OFFER_PENDING, Customer)
                .with_offer(),
        )
        .with_transition(
            TransitionSpec::new(
                PROVIDER_MAKE_COUNTER_OFFER,
                OFFER_PENDING,
                CUSTOMER_OFFER_PENDING,
                Provider,
            )
            .with_offer(),
        )
        .with_transition(
            TransitionSpec::new(
                CUSTOMER_MAKE_COUNTER_OFFER,
                CUSTOMER_OFFER_PENDING,
                OFFER_PENDING,
                Customer,
            )
            .with_offer(),
        )
        .with_transition(
            TransitionSpec::new(
                CUSTOMER_WITHDRAW_COUNTER_OFFER,
                OFFER_PENDING,
                CUSTOMER_OFFER_PENDING,
                Customer,
            )
            .with_offer(),
        )
        .with_transition(
            TransitionSpec::new(
                PROVIDER_WITHDRAW_COUNTER_OFFER,
                CUSTOMER_OFFER_PENDING,
                OFFER_PENDING,
                Provider,
            )
            .with_offer(),
        )
        .with_transition(TransitionSpec::new(
            PROVIDER_ACCEPT_OFFER,
            OFFER_PENDING,
            OFFER_ACCEPTED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            CUSTOMER_ACCEPT_OFFER,
            CUSTOMER_OFFER_PENDING,
            OFFER_ACCEPTED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            PROVIDER_DECLINE_OFFER,
            OFFER_PENDING,
            OFFER_DECLINED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            CUSTOMER_DECLINE_OFFER,
            CUSTOMER_OFFER_PENDING,
            OFFER_DECLINED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_OFFER,
            OFFER_PENDING,
            OFFER_EXPIRED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_COUNTER_OFFER,
            CUSTOMER_OFFER_PENDING,
            OFFER_EXPIRED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            REQUEST_PAYMENT,
            OFFER_ACCEPTED,
            PENDING_PAYMENT,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            CONFIRM_PAYMENT,
            PENDING_PAYMENT,
            PURCHASED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_PAYMENT,
            PENDING_PAYMENT,
            PAYMENT_EXPIRED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            MARK_DELIVERED,
            PURCHASED,
            DELIVERED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            MARK_RECEIVED,
            DELIVERED,
            RECEIVED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            AUTO_MARK_RECEIVED,
            DELIVERED,
            RECEIVED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_1_BY_CUSTOMER,
            RECEIVED,
            REVIEWED_BY_CUSTOMER,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_1_BY_PROVIDER,
            RECEIVED,
            REVIEWED_BY_PROVIDER,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_2_BY_CUSTOMER,
            REVIEWED_BY_PROVIDER,
            REVIEWED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_2_BY_PROVIDER,
            REVIEWED_BY_CUSTOMER,
            REVIEWED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_REVIEW_PERIOD,
            RECEIVED,
            REVIEWED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_CUSTOMER_REVIEW_PERIOD,
            REVIEWED_BY_PROVIDER,
            REVIEWED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_PROVIDER_REVIEW_PERIOD,
            REVIEWED_BY_CUSTOMER,
            REVIEWED,
            System,
        ))
}
