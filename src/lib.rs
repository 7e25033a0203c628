//! Network-attached Othello agent.
//!
//! The pure core lives in [`board`] (rules: legality, flip computation,
//! move application) and [`selector`] (two-step greedy move choice).
//! [`protocol`] is the thin adapter translating between the server's JSON
//! wire format and the core's value types.

pub mod board;
pub mod protocol;
pub mod selector;
pub mod types;
