//! # Domain Types
//!
//! Core domain types for the ticket purchase pipeline.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │  TicketCategory  │   │TicketTypeRequest │   │ PurchaseSummary  │    │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  Adult  £25      │   │  category        │   │  per-category    │    │
//! │  │  Child  £15      │──►│  count (i64)     │──►│  counts, total   │    │
//! │  │  Infant £0       │   │  (immutable)     │   │  cost and seats  │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  Requests flow in, a summary flows out; the summary is ephemeral and    │
//! │  discarded once the business rules have run against it.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PurchaseError, PurchaseResult};
use crate::money::Money;

// =============================================================================
// Ticket Category
// =============================================================================

/// The closed set of ticket categories.
///
/// Category determines the unit price and whether a seat is allocated.
/// Infants sit on an adult's lap: they are free and occupy no seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// All categories, in pricing-table order.
    pub const ALL: [TicketCategory; 3] =
        [TicketCategory::Adult, TicketCategory::Child, TicketCategory::Infant];

    /// The static price table: category → unit price.
    ///
    /// A const match is immutable for the process lifetime; there is no way
    /// to mutate a price at runtime.
    #[inline]
    pub const fn unit_price(&self) -> Money {
        match self {
            TicketCategory::Adult => Money::from_pounds(25),
            TicketCategory::Child => Money::from_pounds(15),
            TicketCategory::Infant => Money::from_pounds(0),
        }
    }

    /// Whether a ticket of this category occupies a seat.
    #[inline]
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }

    /// The wire token for this category ("ADULT", "CHILD", "INFANT").
    pub const fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a category token from untyped input.
///
/// This is where the "unknown category" error class surfaces: inside the
/// crate the enum is closed, so only boundary input can carry a bad token.
impl FromStr for TicketCategory {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketCategory::Adult),
            "CHILD" => Ok(TicketCategory::Child),
            "INFANT" => Ok(TicketCategory::Infant),
            other => Err(PurchaseError::UnknownTicketCategory(other.to_string())),
        }
    }
}

// =============================================================================
// Ticket Type Request
// =============================================================================

/// An immutable (category, count) pair: "N tickets of this category".
///
/// ## Design Notes
/// - Fields are private so a constructed request can never change.
/// - The count is deliberately NOT validated here (it is a plain i64 and may
///   be zero or negative); the purchase pipeline checks it once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeRequest {
    category: TicketCategory,
    count: i64,
}

impl TicketTypeRequest {
    /// Creates a request for `count` tickets of `category`.
    #[inline]
    pub const fn new(category: TicketCategory, count: i64) -> Self {
        TicketTypeRequest { category, count }
    }

    /// Builds a request from untyped parts (category token + count).
    ///
    /// Validation order is part of the contract: the count is checked before
    /// the category token, so a record that is invalid both ways reports the
    /// bad count first.
    ///
    /// ```rust
    /// use boxoffice_core::types::TicketTypeRequest;
    /// use boxoffice_core::PurchaseError;
    ///
    /// assert!(TicketTypeRequest::from_parts("ADULT", 2).is_ok());
    /// assert_eq!(
    ///     TicketTypeRequest::from_parts("SENIOR", 0),
    ///     Err(PurchaseError::EmptyTicketRequest),
    /// );
    /// ```
    pub fn from_parts(category: &str, count: i64) -> PurchaseResult<Self> {
        if count <= 0 {
            return Err(PurchaseError::EmptyTicketRequest);
        }

        Ok(TicketTypeRequest::new(category.parse()?, count))
    }

    /// The category of tickets requested.
    #[inline]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// How many tickets were requested (unvalidated, may be ≤ 0).
    #[inline]
    pub const fn count(&self) -> i64 {
        self.count
    }
}

// =============================================================================
// Purchase Summary
// =============================================================================

/// The aggregate computed from one batch of requests.
///
/// ## Invariants
/// - `total_ticket_count` counts adult + child tickets ONLY. Infants occupy
///   no seat and do not count toward the per-purchase cap.
/// - `total_seats` equals `total_ticket_count` (one seat per adult/child).
/// - Built fresh per purchase call and discarded after the rules run;
///   never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    /// Tickets requested in the Adult category.
    pub adult_count: i64,

    /// Tickets requested in the Child category.
    pub child_count: i64,

    /// Tickets requested in the Infant category.
    pub infant_count: i64,

    /// Adult + child tickets; the quantity the 25-ticket cap applies to.
    pub total_ticket_count: i64,

    /// What the payment gateway will be asked to charge.
    pub total_cost: Money,

    /// What the reservation service will be asked to reserve.
    pub total_seats: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
