use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

#[test]
fn withdraw_requires_owner() {
    let mut contract = new_contract();
    testing_env!(context(minter()).build());

    assert!(matches!(contract.withdraw(), Err(CollectionError::NotOwner)));
}

#[test]
fn withdraw_pays_out_the_accumulated_proceeds() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(minter(), mint_price(2)).build());
    contract.mint(minter(), 2).unwrap();
    testing_env!(context_with_deposit(collector(), mint_price(1)).build());
    contract.mint(collector(), 1).unwrap();
    assert_eq!(contract.sales_balance().0, mint_price(3));

    testing_env!(context(owner()).build());
    assert!(contract.withdraw().is_ok());
    assert_eq!(contract.sales_balance().0, 0);

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("withdrawn"));
    assert!(logs[0].contains(&mint_price(3).to_string()));
}

#[test]
fn withdraw_at_zero_balance_succeeds() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    assert!(contract.withdraw().is_ok());
    assert_eq!(contract.sales_balance().0, 0);
}

#[test]
fn second_withdraw_transfers_nothing_more() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), mint_price(1)).build());
    contract.mint(minter(), 1).unwrap();

    testing_env!(context(owner()).build());
    assert!(contract.withdraw().is_ok());
    assert_eq!(contract.sales_balance().0, 0);
    assert!(contract.withdraw().is_ok());
    assert_eq!(contract.sales_balance().0, 0);
}

#[test]
fn proceeds_keep_accumulating_after_a_withdraw() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), mint_price(1)).build());
    contract.mint(minter(), 1).unwrap();

    testing_env!(context(owner()).build());
    assert!(contract.withdraw().is_ok());

    testing_env!(context_with_deposit(collector(), mint_price(2)).build());
    contract.mint(collector(), 2).unwrap();
    assert_eq!(contract.sales_balance().0, mint_price(2));
}
