//! Test modules for the football betting market contract.

use soroban_sdk::{Bytes, BytesN, Env};

use crate::types::Outcome;

mod matches;

/// Compute a commitment hash the way the off-chain client does:
/// SHA-256 of the outcome byte followed by the salt bytes.
pub(crate) fn commit_hash(env: &Env, outcome: &Outcome, salt: &[u8]) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &[outcome.code()]);
    preimage.append(&Bytes::from_slice(env, salt));
    env.crypto().sha256(&preimage).into()
}
