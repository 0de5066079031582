//! Contract error types for the football betting market.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Operator address not set - call initialize first
    OperatorNotSet = 2,
    /// Only the operator can perform this action
    Unauthorized = 3,
    /// Operation is not valid in the current phase
    WrongPhase = 4,
    /// No match exists with this id
    UnknownMatch = 5,
    /// A match with this id already exists
    DuplicateMatch = 6,
    /// Match ids are externally assigned and must be greater than zero
    InvalidMatchId = 7,
    /// Match has already been settled
    AlreadySettled = 8,
    /// Score must be two single digits separated by '-', e.g. "2-1"
    InvalidScoreFormat = 9,
    /// Match has no recorded score to settle against
    ScoreNotSet = 10,
    /// Stake must be greater than zero
    ZeroStake = 11,
    /// Bettor already holds a commitment on this match
    AlreadyCommitted = 12,
    /// Bettor never committed on this match
    NoCommitment = 13,
    /// Commitment has already been revealed
    AlreadyRevealed = 14,
    /// Revealed outcome and salt do not hash to the stored commitment
    CommitmentMismatch = 15,
    /// Bettor has insufficient balance
    InsufficientBalance = 16,
    /// Arithmetic overflow occurred
    Overflow = 17,
}
