//! Tests for match creation and score recording.

use crate::contract::{FootballBettingContract, FootballBettingContractClient};
use crate::errors::ContractError;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[test]
fn test_create_match() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);

    let m = client.get_match(&1).expect("match should exist");
    assert_eq!(m.id, 1);
    assert_eq!(m.home, home);
    assert_eq!(m.away, away);
    assert_eq!(m.score, None);
    assert!(!m.is_settled);
    assert_eq!(m.pool_home, 0);
    assert_eq!(m.pool_draw, 0);
    assert_eq!(m.pool_away, 0);
    assert_eq!(m.pool_unassigned, 0);

    let all = client.get_all_matches();
    assert_eq!(all.len(), 1);
    assert_eq!(all.get(0).unwrap().id, 1);
}

#[test]
fn test_create_match_duplicate_id() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);

    let result = client.try_create_match(&operator, &1, &away, &home);
    assert_eq!(result, Err(Ok(ContractError::DuplicateMatch)));
}

#[test]
fn test_create_match_zero_id() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");

    let result = client.try_create_match(&operator, &0, &home, &away);
    assert_eq!(result, Err(Ok(ContractError::InvalidMatchId)));
}

#[test]
fn test_create_match_unauthorized() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    let imposter = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");

    let result = client.try_create_match(&imposter, &1, &home, &away);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
}

#[test]
fn test_create_match_in_reveal_phase() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);
    client.open_reveal_phase(&operator);

    // Match creation is valid in any phase
    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);

    assert_eq!(client.get_all_matches().len(), 1);
}

#[test]
fn test_set_score() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);

    let score = String::from_str(&env, "2-1");
    client.set_score(&operator, &1, &score);

    let m = client.get_match(&1).unwrap();
    assert_eq!(m.score, Some(score));
    assert!(!m.is_settled);
}

#[test]
fn test_set_score_overwrites_before_settlement() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);

    client.set_score(&operator, &1, &String::from_str(&env, "1-0"));
    client.set_score(&operator, &1, &String::from_str(&env, "2-1"));

    let m = client.get_match(&1).unwrap();
    assert_eq!(m.score, Some(String::from_str(&env, "2-1")));
}

#[test]
fn test_set_score_unknown_match() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let result = client.try_set_score(&operator, &99, &String::from_str(&env, "2-1"));
    assert_eq!(result, Err(Ok(ContractError::UnknownMatch)));
}

#[test]
fn test_set_score_invalid_formats() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);

    for bad in ["", "21", "2:1", "10-1", "2-10", "a-1", "2-b", "2--1"] {
        let result = client.try_set_score(&operator, &1, &String::from_str(&env, bad));
        assert_eq!(result, Err(Ok(ContractError::InvalidScoreFormat)));
    }

    // Nothing was recorded
    assert_eq!(client.get_match(&1).unwrap().score, None);
}

#[test]
fn test_set_score_during_distribution_fails() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);
    client.create_match(&operator, &2, &away, &home);

    client.set_score(&operator, &1, &String::from_str(&env, "1-0"));
    client.open_reveal_phase(&operator);
    client.open_distribution(&operator, &1);

    // Scores are frozen once Distribution opens
    let result = client.try_set_score(&operator, &2, &String::from_str(&env, "0-2"));
    assert_eq!(result, Err(Ok(ContractError::WrongPhase)));
}

#[test]
fn test_set_score_unauthorized() {
    let env = Env::default();
    let contract_id = env.register(FootballBettingContract, ());
    let client = FootballBettingContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    let imposter = Address::generate(&env);
    env.mock_all_auths();

    client.initialize(&operator);

    let home = String::from_str(&env, "AAA");
    let away = String::from_str(&env, "BBB");
    client.create_match(&operator, &1, &home, &away);

    let result = client.try_set_score(&imposter, &1, &String::from_str(&env, "2-1"));
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
}
