//! Events published for off-chain observers.

use soroban_sdk::{contractevent, Address, BytesN, String};

use crate::types::{Outcome, Phase};

#[contractevent]
pub struct MatchCreated {
    #[topic]
    pub match_id: u32,
    pub home: String,
    pub away: String,
}

#[contractevent]
pub struct ScoreRecorded {
    #[topic]
    pub match_id: u32,
    pub score: String,
}

#[contractevent]
pub struct PhaseAdvanced {
    pub phase: Phase,
}

#[contractevent]
pub struct CommitmentPlaced {
    #[topic]
    pub bettor: Address,
    #[topic]
    pub match_id: u32,
    pub hash: BytesN<32>,
    pub stake: i128,
}

#[contractevent]
pub struct CommitmentRevealed {
    #[topic]
    pub bettor: Address,
    #[topic]
    pub match_id: u32,
    pub outcome: Outcome,
}

#[contractevent]
pub struct MatchSettled {
    #[topic]
    pub match_id: u32,
    pub winning_outcome: Outcome,
    pub total_pool: i128,
    pub winning_pool: i128,
    pub paid_out: i128,
}

#[contractevent]
pub struct BettingReset {
    pub matches_cleared: u32,
}
