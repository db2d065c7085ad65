//! # Error Types
//!
//! Domain-specific error types for boxoffice-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  purchase(account_id, requests)                                         │
//! │       │                                                                 │
//! │       ├── account check ───────► PurchaseError::InvalidAccount          │
//! │       ├── per-request checks ──► EmptyTicketRequest /                   │
//! │       │                          UnknownTicketCategory                  │
//! │       └── business rules ──────► TooManyTickets / NoAdultTickets /      │
//! │                                  TooManyInfants                         │
//! │                                                                         │
//! │  Every variant rejects the WHOLE purchase: no collaborator is called    │
//! │  once any of these is raised.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Purchase Error
// =============================================================================

/// A ticket purchase rejection, raised before any side effect occurs.
///
/// The caller presents the message; nothing is recovered or retried
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Account id is zero or negative.
    #[error("Account ID must be an integer greater than zero")]
    InvalidAccount,

    /// A ticket request asked for zero or a negative number of tickets.
    #[error("Each TicketTypeRequest must have tickets")]
    EmptyTicketRequest,

    /// A category token outside {ADULT, CHILD, INFANT} reached the boundary.
    ///
    /// The offending token is carried so the message names it.
    #[error("Unknown ticket type: {0}")]
    UnknownTicketCategory(String),

    /// Adult + child tickets exceed the per-purchase cap.
    ///
    /// Infants do not count toward the cap (they occupy no seat).
    #[error("Cannot purchase more than {max} tickets")]
    TooManyTickets { max: i64 },

    /// No adult ticket in the batch; children and infants cannot attend alone.
    #[error("There needs to be at least 1 adult")]
    NoAdultTickets,

    /// More infants than adults; each infant rides on one adult's lap.
    #[error("Number of infants exceed the number of adults")]
    TooManyInfants,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PurchaseError.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

// =============================================================================
// Unit Tests
// =============================================================================
