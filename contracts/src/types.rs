//! Type definitions for the football betting market.

use soroban_sdk::{contracttype, Address, BytesN, String};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Balance(Address),
    Operator,
    Phase,
    /// Ids of all created matches, in creation order.
    MatchIds,
    Match(u32),
    /// Map<Address, Commitment> of all commitments on a match.
    Commitments(u32),
}

/// A match result a bettor can commit to.
///
/// The discriminant doubles as the single-byte outcome code in the
/// commitment preimage: `hash = SHA-256(code ‖ salt_bytes)`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Draw = 0,
    HomeWin = 1,
    AwayWin = 2,
}

impl Outcome {
    /// Outcome byte used when hashing a commitment.
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::HomeWin => 1,
            Outcome::AwayWin => 2,
        }
    }
}

/// Global phase gating which operations are valid.
///
/// Advances forward only; `Distribution` carries the match id it was
/// opened for. `reset_all` is the only way back to `Commit`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Commit,
    Reveal,
    Distribution(u32),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub id: u32,
    pub home: String,
    pub away: String,
    /// Final score as "H-A" single digits, e.g. "2-1". Unset until the
    /// operator records it.
    pub score: Option<String>,
    pub is_settled: bool,
    pub pool_home: i128,
    pub pool_draw: i128,
    pub pool_away: i128,
    /// Stakes committed but not yet revealed. Forfeited if never revealed.
    pub pool_unassigned: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Commitment {
    /// SHA-256 of outcome byte ‖ salt bytes, computed off-chain.
    pub hash: BytesN<32>,
    pub stake: i128,
    /// Set at most once, during Reveal, after the hash checks out.
    pub revealed_outcome: Option<Outcome>,
    pub paid: bool,
}
