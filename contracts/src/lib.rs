#![no_std]
//! # Football Match Betting
//!
//! Commit-reveal wagering on football match outcomes using virtual
//! balances. Bettors commit a hidden, funded outcome hash during the
//! Commit phase, disclose outcome and salt during the Reveal phase, and
//! the operator settles each scored match during Distribution,
//! splitting the pool among correct revealers pro rata.
//!
//! ## Key Features
//! - Operator-gated phase machine (Commit → Reveal → Distribution)
//! - SHA-256 commitments hide outcomes until reveal
//! - Checked arithmetic prevents overflow
//! - Proportional payout distribution with truncation-safe accounting
//! - Comprehensive error handling

mod contract;
mod errors;
mod events;
mod types;

#[cfg(test)]
mod tests;

pub use contract::FootballBettingContract;
pub use errors::ContractError;
pub use types::{Commitment, DataKey, Match, Outcome, Phase};
