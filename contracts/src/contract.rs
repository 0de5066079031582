//! Core contract implementation for the football betting market.

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Map, String, Vec};

use crate::errors::ContractError;
use crate::events::{
    BettingReset, CommitmentPlaced, CommitmentRevealed, MatchCreated, MatchSettled, PhaseAdvanced,
    ScoreRecorded,
};
use crate::types::{Commitment, DataKey, Match, Outcome, Phase};

#[contract]
pub struct FootballBettingContract;

#[contractimpl]
impl FootballBettingContract {
    /// Initializes the contract with the operator address (one-time only).
    /// The phase starts at Commit.
    pub fn initialize(env: Env, operator: Address) -> Result<(), ContractError> {
        operator.require_auth();

        if env.storage().persistent().has(&DataKey::Operator) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().persistent().set(&DataKey::Operator, &operator);
        env.storage().persistent().set(&DataKey::Phase, &Phase::Commit);
        env.storage()
            .persistent()
            .set(&DataKey::MatchIds, &Vec::<u32>::new(&env));

        Ok(())
    }

    /// Registers a new match (operator only, any phase).
    pub fn create_match(
        env: Env,
        operator: Address,
        id: u32,
        home: String,
        away: String,
    ) -> Result<(), ContractError> {
        Self::_require_operator(&env, &operator)?;

        if id == 0 {
            return Err(ContractError::InvalidMatchId);
        }

        if env.storage().persistent().has(&DataKey::Match(id)) {
            return Err(ContractError::DuplicateMatch);
        }

        let m = Match {
            id,
            home: home.clone(),
            away: away.clone(),
            score: None,
            is_settled: false,
            pool_home: 0,
            pool_draw: 0,
            pool_away: 0,
            pool_unassigned: 0,
        };
        env.storage().persistent().set(&DataKey::Match(id), &m);

        let mut ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::MatchIds)
            .unwrap_or(Vec::new(&env));
        ids.push_back(id);
        env.storage().persistent().set(&DataKey::MatchIds, &ids);

        MatchCreated { match_id: id, home, away }.publish(&env);

        Ok(())
    }

    /// Records the final score for a match (operator only, before
    /// Distribution opens). Overwrites any earlier unsettled score.
    pub fn set_score(
        env: Env,
        operator: Address,
        match_id: u32,
        score: String,
    ) -> Result<(), ContractError> {
        Self::_require_operator(&env, &operator)?;

        if let Phase::Distribution(_) = Self::get_phase(env.clone()) {
            return Err(ContractError::WrongPhase);
        }

        let mut m: Match = env
            .storage()
            .persistent()
            .get(&DataKey::Match(match_id))
            .ok_or(ContractError::UnknownMatch)?;

        if m.is_settled {
            return Err(ContractError::AlreadySettled);
        }

        Self::_parse_score(&score)?;

        m.score = Some(score.clone());
        env.storage().persistent().set(&DataKey::Match(match_id), &m);

        ScoreRecorded { match_id, score }.publish(&env);

        Ok(())
    }

    /// Confirms the Commit phase. Commit is the entry phase (and the
    /// post-reset phase), so this is a no-op until the phase advances,
    /// after which re-entry is rejected.
    pub fn open_commit_phase(env: Env, operator: Address) -> Result<(), ContractError> {
        Self::_require_operator(&env, &operator)?;

        if Self::get_phase(env.clone()) != Phase::Commit {
            return Err(ContractError::WrongPhase);
        }

        Ok(())
    }

    /// Advances Commit → Reveal (operator only, forward only).
    pub fn open_reveal_phase(env: Env, operator: Address) -> Result<(), ContractError> {
        Self::_require_operator(&env, &operator)?;

        if Self::get_phase(env.clone()) != Phase::Commit {
            return Err(ContractError::WrongPhase);
        }

        env.storage().persistent().set(&DataKey::Phase, &Phase::Reveal);
        PhaseAdvanced { phase: Phase::Reveal }.publish(&env);

        Ok(())
    }

    /// Opens Distribution targeting a match and settles it (operator only).
    /// Valid from Reveal, or from Distribution to target another match.
    /// Settlement failures abort the call, phase change included.
    pub fn open_distribution(
        env: Env,
        operator: Address,
        match_id: u32,
    ) -> Result<(), ContractError> {
        Self::_require_operator(&env, &operator)?;

        match Self::get_phase(env.clone()) {
            Phase::Reveal | Phase::Distribution(_) => {}
            Phase::Commit => return Err(ContractError::WrongPhase),
        }

        let phase = Phase::Distribution(match_id);
        env.storage().persistent().set(&DataKey::Phase, &phase);
        PhaseAdvanced { phase }.publish(&env);

        Self::_settle_match(&env, match_id)
    }

    /// Settles every unsettled match that has a score (operator only,
    /// Distribution phase). Matches without a score are skipped.
    pub fn settle_all(env: Env, operator: Address) -> Result<(), ContractError> {
        Self::_require_operator(&env, &operator)?;

        match Self::get_phase(env.clone()) {
            Phase::Distribution(_) => {}
            _ => return Err(ContractError::WrongPhase),
        }

        let ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::MatchIds)
            .unwrap_or(Vec::new(&env));

        for id in ids.iter() {
            if let Some(m) = env
                .storage()
                .persistent()
                .get::<DataKey, Match>(&DataKey::Match(id))
            {
                if !m.is_settled && m.score.is_some() {
                    Self::_settle_match(&env, id)?;
                }
            }
        }

        Ok(())
    }

    /// Clears every match and commitment and returns to the Commit phase
    /// (operator only, any phase). Stakes still held in pools are
    /// forfeited; bettor balances are untouched.
    pub fn reset_all(env: Env, operator: Address) -> Result<(), ContractError> {
        Self::_require_operator(&env, &operator)?;

        let ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::MatchIds)
            .unwrap_or(Vec::new(&env));

        for id in ids.iter() {
            env.storage().persistent().remove(&DataKey::Match(id));
            env.storage().persistent().remove(&DataKey::Commitments(id));
        }

        env.storage()
            .persistent()
            .set(&DataKey::MatchIds, &Vec::<u32>::new(&env));
        env.storage().persistent().set(&DataKey::Phase, &Phase::Commit);

        BettingReset { matches_cleared: ids.len() }.publish(&env);

        Ok(())
    }

    /// Places a hidden, funded commitment on a match (Commit phase).
    /// `hash` is SHA-256 of the outcome byte followed by the salt bytes,
    /// computed off-chain. The stake is debited from the bettor's balance
    /// and held in the match's unassigned pool until revealed.
    pub fn commit(
        env: Env,
        bettor: Address,
        match_id: u32,
        hash: BytesN<32>,
        stake: i128,
    ) -> Result<(), ContractError> {
        bettor.require_auth();

        if Self::get_phase(env.clone()) != Phase::Commit {
            return Err(ContractError::WrongPhase);
        }

        let mut m: Match = env
            .storage()
            .persistent()
            .get(&DataKey::Match(match_id))
            .ok_or(ContractError::UnknownMatch)?;

        if m.is_settled {
            return Err(ContractError::AlreadySettled);
        }

        if stake <= 0 {
            return Err(ContractError::ZeroStake);
        }

        let mut commitments: Map<Address, Commitment> = env
            .storage()
            .persistent()
            .get(&DataKey::Commitments(match_id))
            .unwrap_or(Map::new(&env));

        if commitments.contains_key(bettor.clone()) {
            return Err(ContractError::AlreadyCommitted);
        }

        let bettor_balance = Self::balance(env.clone(), bettor.clone());
        if bettor_balance < stake {
            return Err(ContractError::InsufficientBalance);
        }

        let new_balance = bettor_balance
            .checked_sub(stake)
            .ok_or(ContractError::Overflow)?;
        Self::_set_balance(&env, bettor.clone(), new_balance);

        m.pool_unassigned = m
            .pool_unassigned
            .checked_add(stake)
            .ok_or(ContractError::Overflow)?;

        let commitment = Commitment {
            hash: hash.clone(),
            stake,
            revealed_outcome: None,
            paid: false,
        };
        commitments.set(bettor.clone(), commitment);

        env.storage()
            .persistent()
            .set(&DataKey::Commitments(match_id), &commitments);
        env.storage().persistent().set(&DataKey::Match(match_id), &m);

        CommitmentPlaced { bettor, match_id, hash, stake }.publish(&env);

        Ok(())
    }

    /// Discloses the outcome and salt behind a commitment (Reveal phase).
    /// On success the stake moves from the unassigned pool into the pool
    /// for the revealed outcome.
    pub fn reveal(
        env: Env,
        bettor: Address,
        match_id: u32,
        outcome: Outcome,
        salt: Bytes,
    ) -> Result<(), ContractError> {
        bettor.require_auth();

        if Self::get_phase(env.clone()) != Phase::Reveal {
            return Err(ContractError::WrongPhase);
        }

        let mut m: Match = env
            .storage()
            .persistent()
            .get(&DataKey::Match(match_id))
            .ok_or(ContractError::UnknownMatch)?;

        let mut commitments: Map<Address, Commitment> = env
            .storage()
            .persistent()
            .get(&DataKey::Commitments(match_id))
            .unwrap_or(Map::new(&env));

        let mut commitment = commitments
            .get(bettor.clone())
            .ok_or(ContractError::NoCommitment)?;

        if commitment.revealed_outcome.is_some() {
            return Err(ContractError::AlreadyRevealed);
        }

        let mut preimage = Bytes::from_array(&env, &[outcome.code()]);
        preimage.append(&salt);
        let computed: BytesN<32> = env.crypto().sha256(&preimage).into();

        if computed != commitment.hash {
            return Err(ContractError::CommitmentMismatch);
        }

        m.pool_unassigned = m
            .pool_unassigned
            .checked_sub(commitment.stake)
            .ok_or(ContractError::Overflow)?;

        match outcome {
            Outcome::Draw => {
                m.pool_draw = m
                    .pool_draw
                    .checked_add(commitment.stake)
                    .ok_or(ContractError::Overflow)?;
            }
            Outcome::HomeWin => {
                m.pool_home = m
                    .pool_home
                    .checked_add(commitment.stake)
                    .ok_or(ContractError::Overflow)?;
            }
            Outcome::AwayWin => {
                m.pool_away = m
                    .pool_away
                    .checked_add(commitment.stake)
                    .ok_or(ContractError::Overflow)?;
            }
        }

        commitment.revealed_outcome = Some(outcome.clone());
        commitments.set(bettor.clone(), commitment);

        env.storage()
            .persistent()
            .set(&DataKey::Commitments(match_id), &commitments);
        env.storage().persistent().set(&DataKey::Match(match_id), &m);

        CommitmentRevealed { bettor, match_id, outcome }.publish(&env);

        Ok(())
    }

    /// Returns every match with current pools and settlement status,
    /// in creation order.
    pub fn get_all_matches(env: Env) -> Vec<Match> {
        let ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::MatchIds)
            .unwrap_or(Vec::new(&env));

        let mut matches = Vec::new(&env);
        for id in ids.iter() {
            if let Some(m) = env
                .storage()
                .persistent()
                .get::<DataKey, Match>(&DataKey::Match(id))
            {
                matches.push_back(m);
            }
        }

        matches
    }

    /// Returns a single match, or `None` if the id is unknown.
    pub fn get_match(env: Env, match_id: u32) -> Option<Match> {
        env.storage().persistent().get(&DataKey::Match(match_id))
    }

    /// Returns the bettor's commitment on a match, or `None`.
    pub fn get_commitment(env: Env, match_id: u32, bettor: Address) -> Option<Commitment> {
        let commitments: Map<Address, Commitment> = env
            .storage()
            .persistent()
            .get(&DataKey::Commitments(match_id))
            .unwrap_or(Map::new(&env));

        commitments.get(bettor)
    }

    /// Returns the current global phase.
    pub fn get_phase(env: Env) -> Phase {
        env.storage()
            .persistent()
            .get(&DataKey::Phase)
            .unwrap_or(Phase::Commit)
    }

    pub fn get_operator(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Operator)
    }

    /// Mints 1000 units for new bettors (one-time only)
    pub fn mint_initial(env: Env, bettor: Address) -> i128 {
        bettor.require_auth();

        let key = DataKey::Balance(bettor.clone());

        if let Some(existing_balance) = env.storage().persistent().get(&key) {
            return existing_balance;
        }

        let initial_amount: i128 = 1000_0000000;
        env.storage().persistent().set(&key, &initial_amount);

        initial_amount
    }

    /// Returns the bettor's balance
    pub fn balance(env: Env, bettor: Address) -> i128 {
        let key = DataKey::Balance(bettor);
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    pub(crate) fn _set_balance(env: &Env, bettor: Address, amount: i128) {
        let key = DataKey::Balance(bettor);
        env.storage().persistent().set(&key, &amount);
    }

    /// Checks the caller is the stored operator.
    fn _require_operator(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let operator: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Operator)
            .ok_or(ContractError::OperatorNotSet)?;

        caller.require_auth();
        if *caller != operator {
            return Err(ContractError::Unauthorized);
        }

        Ok(())
    }

    /// Validates a "H-A" single-digit score string and returns the digits.
    fn _parse_score(score: &String) -> Result<(u8, u8), ContractError> {
        if score.len() != 3 {
            return Err(ContractError::InvalidScoreFormat);
        }

        let mut buf = [0u8; 3];
        score.copy_into_slice(&mut buf);

        if !buf[0].is_ascii_digit() || buf[1] != b'-' || !buf[2].is_ascii_digit() {
            return Err(ContractError::InvalidScoreFormat);
        }

        Ok((buf[0] - b'0', buf[2] - b'0'))
    }

    fn _winning_outcome(score: &String) -> Result<Outcome, ContractError> {
        let (home, away) = Self::_parse_score(score)?;

        if home > away {
            Ok(Outcome::HomeWin)
        } else if home < away {
            Ok(Outcome::AwayWin)
        } else {
            Ok(Outcome::Draw)
        }
    }

    /// Settles one match: derives the winner from the score, pays every
    /// revealed, unpaid commitment on the winning outcome its pro-rata
    /// share of the distributable pool, and marks the match settled.
    ///
    /// Payout = stake * total_pool / winning_pool, truncating. Winning
    /// stakes sum to winning_pool, so the truncated payouts can never
    /// exceed total_pool; the remainder stays in the contract unclaimed.
    /// The unassigned pool (unrevealed stakes) is excluded from both
    /// total_pool and winning_pool.
    fn _settle_match(env: &Env, match_id: u32) -> Result<(), ContractError> {
        let mut m: Match = env
            .storage()
            .persistent()
            .get(&DataKey::Match(match_id))
            .ok_or(ContractError::UnknownMatch)?;

        if m.is_settled {
            return Err(ContractError::AlreadySettled);
        }

        let score = m.score.clone().ok_or(ContractError::ScoreNotSet)?;
        let winning = Self::_winning_outcome(&score)?;

        let total_pool = m
            .pool_home
            .checked_add(m.pool_draw)
            .and_then(|sum| sum.checked_add(m.pool_away))
            .ok_or(ContractError::Overflow)?;

        let winning_pool = match winning {
            Outcome::Draw => m.pool_draw,
            Outcome::HomeWin => m.pool_home,
            Outcome::AwayWin => m.pool_away,
        };

        let mut paid_out: i128 = 0;

        // winning_pool == 0 means nobody revealed correctly: the whole
        // pool stays unclaimed and the match still settles.
        if winning_pool > 0 {
            let mut commitments: Map<Address, Commitment> = env
                .storage()
                .persistent()
                .get(&DataKey::Commitments(match_id))
                .unwrap_or(Map::new(env));

            let bettors: Vec<Address> = commitments.keys();

            for i in 0..bettors.len() {
                if let Some(bettor) = bettors.get(i) {
                    if let Some(mut commitment) = commitments.get(bettor.clone()) {
                        if !commitment.paid
                            && commitment.revealed_outcome == Some(winning.clone())
                        {
                            let payout = commitment
                                .stake
                                .checked_mul(total_pool)
                                .ok_or(ContractError::Overflow)?
                                / winning_pool;

                            let new_balance = Self::balance(env.clone(), bettor.clone())
                                .checked_add(payout)
                                .ok_or(ContractError::Overflow)?;
                            Self::_set_balance(env, bettor.clone(), new_balance);

                            commitment.paid = true;
                            commitments.set(bettor.clone(), commitment);

                            paid_out = paid_out
                                .checked_add(payout)
                                .ok_or(ContractError::Overflow)?;
                        }
                    }
                }
            }

            env.storage()
                .persistent()
                .set(&DataKey::Commitments(match_id), &commitments);
        }

        m.is_settled = true;
        env.storage().persistent().set(&DataKey::Match(match_id), &m);

        MatchSettled {
            match_id,
            winning_outcome: winning,
            total_pool,
            winning_pool,
            paid_out,
        }
        .publish(env);

        Ok(())
    }
}
