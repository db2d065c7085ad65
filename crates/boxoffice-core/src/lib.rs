//! # boxoffice-core: Pure Business Logic for Box Office
//!
//! This crate validates and prices a batch of ticket purchase requests for a
//! single account, then delegates payment and seat reservation to external
//! collaborators. Nothing external is called until every check has passed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Box Office Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Host Application                            │   │
//! │  │   builds TicketTypeRequests, wires in real collaborators        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ boxoffice-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │  service  │  │   │
//! │  │   │ Category  │  │   Money   │  │ Purchase  │  │  Ticket   │  │   │
//! │  │   │  Request  │  │  (pence)  │  │   Error   │  │  Service  │  │   │
//! │  │   │  Summary  │  │           │  │           │  │ pipeline  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │ PaymentGateway trait        │ SeatReservation trait │
//! │  ┌───────────────▼──────────────┐ ┌────────────▼──────────────────┐   │
//! │  │       Payment Gateway        │ │   Seat Reservation Service    │   │
//! │  │   (external, host-provided)  │ │   (external, host-provided)   │   │
//! │  └──────────────────────────────┘ └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TicketCategory, TicketTypeRequest, PurchaseSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`service`] - The purchase pipeline and collaborator contracts
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: validation and pricing are deterministic
//! 2. **All-or-Nothing**: no side effect occurs once any check fails
//! 3. **Integer Money**: all monetary values are pence (i64), never floats
//! 4. **Explicit Errors**: rejections are typed enum variants, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use boxoffice_core::{
//!     Money, PaymentGateway, SeatReservation, TicketCategory, TicketService,
//!     TicketTypeRequest,
//! };
//!
//! struct Payments;
//! impl PaymentGateway for Payments {
//!     fn charge(&self, _account_id: i64, _amount: Money) { /* external call */ }
//! }
//!
//! struct Seats;
//! impl SeatReservation for Seats {
//!     fn reserve(&self, _account_id: i64, _seat_count: i64) { /* external call */ }
//! }
//!
//! let service = TicketService::new(Payments, Seats);
//!
//! // 2 adults + 1 child: charged £65, 3 seats reserved.
//! let requests = [
//!     TicketTypeRequest::new(TicketCategory::Adult, 2),
//!     TicketTypeRequest::new(TicketCategory::Child, 1),
//! ];
//! service.purchase(42, &requests).unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod service;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boxoffice_core::Money` instead of
// `use boxoffice_core::money::Money`

pub use error::{PurchaseError, PurchaseResult};
pub use money::Money;
pub use service::{PaymentGateway, SeatReservation, TicketService};
pub use types::{PurchaseSummary, TicketCategory, TicketTypeRequest};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum tickets in a single purchase.
///
/// ## Business Reason
/// Bulk purchases beyond this size go through a group-booking channel, not
/// this pipeline. The cap applies to adult + child tickets only: infants
/// occupy no seat and are not counted.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 25;
