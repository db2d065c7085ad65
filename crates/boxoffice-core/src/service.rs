//! # Ticket Service
//!
//! The purchase pipeline: validate, summarise, enforce business rules, then
//! (and only then) hand off to the payment and reservation collaborators.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     purchase(account_id, requests)                      │
//! │                                                                         │
//! │  validate account ──► summarise requests ──► business rules             │
//! │        │                     │                     │                    │
//! │        ▼ err                 ▼ err                 ▼ err                │
//! │   ┌─────────────────── rejected (no side effects) ──────────────────┐  │
//! │   └──────────────────────────────────────────────────────────────────┘  │
//! │                                                    │ ok                │
//! │                                                    ▼                   │
//! │                               charge(account, cost)                    │
//! │                                                    │                   │
//! │                                                    ▼                   │
//! │                               reserve(account, seats)                  │
//! │                                                                         │
//! │  All-or-nothing: the first collaborator call happens only after EVERY   │
//! │  validation step has passed. There is no rollback path after it.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxoffice_core::service::{PaymentGateway, SeatReservation, TicketService};
//! use boxoffice_core::types::{TicketCategory, TicketTypeRequest};
//! use boxoffice_core::Money;
//!
//! struct Payments;
//! impl PaymentGateway for Payments {
//!     fn charge(&self, _account_id: i64, _amount: Money) {}
//! }
//!
//! struct Seats;
//! impl SeatReservation for Seats {
//!     fn reserve(&self, _account_id: i64, _seat_count: i64) {}
//! }
//!
//! let service = TicketService::new(Payments, Seats);
//! let requests = [TicketTypeRequest::new(TicketCategory::Adult, 2)];
//! service.purchase(1, &requests).unwrap();
//! ```

use tracing::{debug, info};

use crate::error::{PurchaseError, PurchaseResult};
use crate::money::Money;
use crate::types::{PurchaseSummary, TicketCategory, TicketTypeRequest};
use crate::MAX_TICKETS_PER_PURCHASE;

// =============================================================================
// Collaborator Contracts
// =============================================================================

/// The external payment gateway.
///
/// One-method contract: charge the account for an amount. Success/failure
/// signalling is the gateway's own channel and is not modeled here.
pub trait PaymentGateway {
    fn charge(&self, account_id: i64, amount: Money);
}

/// The external seat reservation service.
///
/// Same contract shape as [`PaymentGateway`]: fire the reservation and trust
/// the service's own error channel.
pub trait SeatReservation {
    fn reserve(&self, account_id: i64, seat_count: i64);
}

// =============================================================================
// Ticket Service
// =============================================================================

/// Validates, prices, and fulfils ticket purchases.
///
/// ## Design Notes
/// - Generic over its collaborators so hosts wire in real services and tests
///   wire in recording fakes (static dispatch, no boxing).
/// - Holds no mutable state: `purchase` takes `&self` and each call is
///   independent, so a shared service needs no synchronisation.
pub struct TicketService<P, R> {
    payments: P,
    reservations: R,
}

impl<P: PaymentGateway, R: SeatReservation> TicketService<P, R> {
    /// Creates a service backed by the given collaborators.
    pub fn new(payments: P, reservations: R) -> Self {
        TicketService {
            payments,
            reservations,
        }
    }

    /// Purchases tickets for an account: the one public operation.
    ///
    /// Runs the full validation pipeline, then charges the account and
    /// reserves seats, in that order, exactly once each. If ANY step fails
    /// the whole purchase is rejected and neither collaborator is called.
    ///
    /// ## Errors
    /// See [`PurchaseError`] for the rejection reasons. Requests are checked
    /// in the given order; the business rules run on the completed summary
    /// and report the first violated rule.
    pub fn purchase(&self, account_id: i64, requests: &[TicketTypeRequest]) -> PurchaseResult<()> {
        validate_account_id(account_id)?;

        let summary = summarise_requests(requests)?;

        validate_business_rules(&summary)?;

        debug!(
            account_id,
            cost_pence = summary.total_cost.pence(),
            seats = summary.total_seats,
            "purchase validated"
        );

        self.payments.charge(account_id, summary.total_cost);
        self.reservations.reserve(account_id, summary.total_seats);

        info!(account_id, total = %summary.total_cost, seats = summary.total_seats, "purchase complete");
        Ok(())
    }
}

// =============================================================================
// Validation Pipeline (private)
// =============================================================================

/// Step 1: the account id must be strictly positive.
fn validate_account_id(account_id: i64) -> PurchaseResult<()> {
    if account_id <= 0 {
        return Err(PurchaseError::InvalidAccount);
    }

    Ok(())
}

/// Step 2: validate each request and fold the batch into a summary.
///
/// The count check runs once per request, before any category-specific
/// summation. Adult and child tickets carry a price and a seat; infants add
/// to their subtotal only.
///
/// The fold saturates: counts are unvalidated i64s and the ticket cap has
/// not run yet, so an astronomical batch clamps at i64::MAX and lands in
/// the cap rejection instead of overflowing.
fn summarise_requests(requests: &[TicketTypeRequest]) -> PurchaseResult<PurchaseSummary> {
    let mut summary = PurchaseSummary::default();

    for request in requests {
        let count = request.count();

        if count <= 0 {
            return Err(PurchaseError::EmptyTicketRequest);
        }

        match request.category() {
            TicketCategory::Adult => {
                summary.adult_count = summary.adult_count.saturating_add(count);
                summary.total_ticket_count = summary.total_ticket_count.saturating_add(count);
                summary.total_cost = summary
                    .total_cost
                    .saturating_add(TicketCategory::Adult.unit_price().saturating_mul(count));
                summary.total_seats = summary.total_seats.saturating_add(count);
            }
            TicketCategory::Child => {
                summary.child_count = summary.child_count.saturating_add(count);
                summary.total_ticket_count = summary.total_ticket_count.saturating_add(count);
                summary.total_cost = summary
                    .total_cost
                    .saturating_add(TicketCategory::Child.unit_price().saturating_mul(count));
                summary.total_seats = summary.total_seats.saturating_add(count);
            }
            TicketCategory::Infant => {
                // No cost, no seat: infants ride on an adult's lap.
                summary.infant_count = summary.infant_count.saturating_add(count);
            }
        }
    }

    Ok(summary)
}

/// Step 3: business rules on the completed summary.
///
/// Rule order is a contract (the first violation is what the caller sees):
/// ticket cap, then adult presence, then infant/adult ratio.
fn validate_business_rules(summary: &PurchaseSummary) -> PurchaseResult<()> {
    if summary.total_ticket_count > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseError::TooManyTickets {
            max: MAX_TICKETS_PER_PURCHASE,
        });
    }

    if summary.adult_count <= 0 {
        return Err(PurchaseError::NoAdultTickets);
    }

    if summary.infant_count > summary.adult_count {
        return Err(PurchaseError::TooManyInfants);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// One entry per collaborator invocation, in call order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Charged { account_id: i64, amount: Money },
        Reserved { account_id: i64, seats: i64 },
    }

    /// Both fakes append to one shared log so tests can assert not just
    /// per-collaborator counts but the charge-before-reserve order.
    type CallLog = Rc<RefCell<Vec<Call>>>;

    struct RecordingGateway(CallLog);

    impl PaymentGateway for RecordingGateway {
        fn charge(&self, account_id: i64, amount: Money) {
            self.0.borrow_mut().push(Call::Charged { account_id, amount });
        }
    }

    struct RecordingReservation(CallLog);

    impl SeatReservation for RecordingReservation {
        fn reserve(&self, account_id: i64, seats: i64) {
            self.0.borrow_mut().push(Call::Reserved { account_id, seats });
        }
    }

    fn service() -> (TicketService<RecordingGateway, RecordingReservation>, CallLog) {
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        let service = TicketService::new(
            RecordingGateway(Rc::clone(&log)),
            RecordingReservation(Rc::clone(&log)),
        );
        (service, log)
    }

    fn adult(count: i64) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketCategory::Adult, count)
    }

    fn child(count: i64) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketCategory::Child, count)
    }

    fn infant(count: i64) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketCategory::Infant, count)
    }

    // -------------------------------------------------------------------------
    // Account validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_rejects_non_positive_account_ids() {
        for bad_id in [0, -1, i64::MIN] {
            let (service, log) = service();

            let result = service.purchase(bad_id, &[adult(1)]);

            assert_eq!(result, Err(PurchaseError::InvalidAccount));
            assert!(log.borrow().is_empty(), "no collaborator call for id {bad_id}");
        }
    }

    // -------------------------------------------------------------------------
    // Ticket request validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_rejects_requests_with_no_tickets() {
        for bad_count in [0, -1] {
            let (service, log) = service();

            let result = service.purchase(1, &[adult(bad_count)]);

            assert_eq!(result, Err(PurchaseError::EmptyTicketRequest));
            assert!(log.borrow().is_empty());
        }
    }

    #[test]
    fn test_rejects_bad_count_regardless_of_category() {
        for request in [adult(0), child(0), infant(0)] {
            let (service, _) = service();
            assert_eq!(
                service.purchase(1, &[adult(1), request]),
                Err(PurchaseError::EmptyTicketRequest),
            );
        }
    }

    #[test]
    fn test_rejects_bad_count_anywhere_in_the_batch() {
        let (service, log) = service();

        let result = service.purchase(1, &[adult(2), child(3), child(-1)]);

        assert_eq!(result, Err(PurchaseError::EmptyTicketRequest));
        assert!(log.borrow().is_empty());
    }

    // -------------------------------------------------------------------------
    // Business rules
    // -------------------------------------------------------------------------

    #[test]
    fn test_rejects_more_than_25_tickets() {
        let (service, log) = service();

        let result = service.purchase(1, &[adult(26)]);

        assert_eq!(result, Err(PurchaseError::TooManyTickets { max: 25 }));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_accepts_exactly_25_tickets() {
        let (service, log) = service();

        service.purchase(1, &[adult(25)]).unwrap();

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_huge_counts_are_rejected_not_wrapped() {
        // Summation must not overflow before the cap check gets to run.
        let (service, log) = service();

        let result = service.purchase(1, &[adult(i64::MAX)]);

        assert_eq!(result, Err(PurchaseError::TooManyTickets { max: 25 }));
        assert!(log.borrow().is_empty());

        let (service, log) = self::service();

        let result = service.purchase(1, &[adult(i64::MAX), child(i64::MAX), infant(i64::MAX)]);

        assert_eq!(result, Err(PurchaseError::TooManyTickets { max: 25 }));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_cap_spans_adult_and_child_requests() {
        let (service, _) = service();

        assert_eq!(
            service.purchase(1, &[adult(13), child(13)]),
            Err(PurchaseError::TooManyTickets { max: 25 }),
        );
    }

    #[test]
    fn test_infants_do_not_count_toward_the_cap() {
        let (service, log) = service();

        // 40 tickets in total, but only 20 count toward the cap.
        service.purchase(1, &[adult(20), infant(20)]).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Call::Charged {
                    account_id: 1,
                    amount: Money::from_pounds(500),
                },
                Call::Reserved {
                    account_id: 1,
                    seats: 20,
                },
            ],
        );
    }

    #[test]
    fn test_rejects_purchases_without_an_adult() {
        let (service, log) = service();

        let result = service.purchase(1, &[child(5)]);

        assert_eq!(result, Err(PurchaseError::NoAdultTickets));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_rejects_empty_request_list() {
        let (service, log) = service();

        assert_eq!(service.purchase(1, &[]), Err(PurchaseError::NoAdultTickets));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_rejects_more_infants_than_adults() {
        let (service, log) = service();

        let result = service.purchase(1, &[adult(10), infant(15)]);

        assert_eq!(result, Err(PurchaseError::TooManyInfants));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_accepts_one_infant_per_adult() {
        let (service, log) = service();

        service.purchase(1, &[adult(5), infant(5)]).unwrap();

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_rule_order_cap_before_adult_presence() {
        let (service, _) = service();

        // Violates the cap AND has no adults; the cap is reported.
        assert_eq!(
            service.purchase(1, &[child(26)]),
            Err(PurchaseError::TooManyTickets { max: 25 }),
        );
    }

    #[test]
    fn test_rule_order_cap_before_infant_ratio() {
        let (service, _) = service();

        // Violates the cap AND the infant ratio; the cap is reported.
        assert_eq!(
            service.purchase(1, &[adult(26), infant(30)]),
            Err(PurchaseError::TooManyTickets { max: 25 }),
        );
    }

    #[test]
    fn test_rule_order_adult_presence_before_infant_ratio() {
        let (service, _) = service();

        // No adults AND more infants than adults; the missing adult wins.
        assert_eq!(
            service.purchase(1, &[infant(3)]),
            Err(PurchaseError::NoAdultTickets),
        );
    }

    // -------------------------------------------------------------------------
    // Successful purchase
    // -------------------------------------------------------------------------

    #[test]
    fn test_charges_and_reserves_on_success() {
        let (service, log) = service();

        service
            .purchase(1, &[adult(10), infant(5), child(5)])
            .unwrap();

        // 10×£25 + 5×£15 = £325; infants add no cost and no seat.
        // Exactly one charge, then exactly one reservation.
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Charged {
                    account_id: 1,
                    amount: Money::from_pounds(325),
                },
                Call::Reserved {
                    account_id: 1,
                    seats: 15,
                },
            ],
        );
    }

    #[test]
    fn test_repeated_categories_accumulate() {
        let (service, log) = service();

        service
            .purchase(7, &[adult(1), child(2), adult(3), child(1)])
            .unwrap();

        // 4 adults + 3 children: 4×£25 + 3×£15 = £145, 7 seats.
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Charged {
                    account_id: 7,
                    amount: Money::from_pounds(145),
                },
                Call::Reserved {
                    account_id: 7,
                    seats: 7,
                },
            ],
        );
    }

    #[test]
    fn test_single_adult_minimal_purchase() {
        let (service, log) = service();

        service.purchase(1, &[adult(1)]).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Call::Charged {
                    account_id: 1,
                    amount: Money::from_pounds(25),
                },
                Call::Reserved {
                    account_id: 1,
                    seats: 1,
                },
            ],
        );
    }

    // -------------------------------------------------------------------------
    // Summarisation internals
    // -------------------------------------------------------------------------

    #[test]
    fn test_summary_counts_and_cost() {
        let summary = summarise_requests(&[adult(10), infant(5), child(5)]).unwrap();

        assert_eq!(summary.adult_count, 10);
        assert_eq!(summary.child_count, 5);
        assert_eq!(summary.infant_count, 5);
        assert_eq!(summary.total_ticket_count, 15);
        assert_eq!(summary.total_cost, Money::from_pounds(325));
        assert_eq!(summary.total_seats, 15);
    }

    #[test]
    fn test_summary_of_empty_batch_is_all_zero() {
        assert_eq!(summarise_requests(&[]).unwrap(), PurchaseSummary::default());
    }
}
