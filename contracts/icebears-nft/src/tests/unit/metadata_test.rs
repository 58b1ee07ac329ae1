use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Existence ---

#[test]
fn token_uri_requires_a_minted_id() {
    let mut contract = new_contract();
    assert!(matches!(
        contract.token_uri(1),
        Err(CollectionError::NonexistentToken(1))
    ));

    testing_env!(context_with_deposit(minter(), mint_price(1)).build());
    contract.mint(minter(), 1).unwrap();

    assert!(contract.token_uri(1).is_ok());
    assert!(matches!(
        contract.token_uri(0),
        Err(CollectionError::NonexistentToken(0))
    ));
    assert!(matches!(
        contract.token_uri(2),
        Err(CollectionError::NonexistentToken(2))
    ));
}

// --- Suffix branching ---

#[test]
fn slash_terminated_base_uri_omits_the_extension() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), mint_price(2)).build());
    contract.mint(minter(), 2).unwrap();

    assert_eq!(contract.token_uri(1).unwrap(), format!("{TEST_BASE_URI}1"));
    assert_eq!(contract.token_uri(2).unwrap(), format!("{TEST_BASE_URI}2"));
}

#[test]
fn non_slash_base_uri_appends_json_extension() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), mint_price(1)).build());
    contract.mint(minter(), 1).unwrap();

    testing_env!(context(owner()).build());
    contract.set_base_uri("test".to_string()).unwrap();
    assert_eq!(contract.token_uri(1).unwrap(), "test1.json");
}

#[test]
fn empty_base_uri_resolves_to_empty_string() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), mint_price(2)).build());
    contract.mint(minter(), 2).unwrap();

    testing_env!(context(owner()).build());
    contract.set_base_uri(String::new()).unwrap();
    assert_eq!(contract.token_uri(1).unwrap(), "");
    assert_eq!(contract.token_uri(2).unwrap(), "");

    // Unminted ids still fail rather than resolving to empty.
    assert!(matches!(
        contract.token_uri(3),
        Err(CollectionError::NonexistentToken(3))
    ));
}

#[test]
fn base_uri_change_reflects_in_existing_tokens() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), mint_price(1)).build());
    contract.mint(minter(), 1).unwrap();
    assert_eq!(contract.token_uri(1).unwrap(), format!("{TEST_BASE_URI}1"));

    testing_env!(context(owner()).build());
    contract.set_base_uri("ipfs://bears/".to_string()).unwrap();
    assert_eq!(contract.token_uri(1).unwrap(), "ipfs://bears/1");
}
