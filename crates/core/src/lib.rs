//! Pure domain rules for the gym back office.
//!
//! Nothing in this crate touches the database or the network; handlers in
//! `gymdesk-api` load rows through `gymdesk-db` and ask these modules whether
//! a workflow may proceed.

pub mod attendance;
pub mod enrollment;
pub mod error;
pub mod listing;
pub mod membership;
pub mod salary;
pub mod types;
