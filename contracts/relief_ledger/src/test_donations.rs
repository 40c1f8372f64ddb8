extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::invariants::{
    assert_debit_invariant, assert_donation_valid, assert_expenditure_valid,
    assert_sequential_ids,
};
use crate::{Error, ReliefLedger, ReliefLedgerClient};

fn setup() -> (Env, ReliefLedgerClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    let contract_id = env.register(ReliefLedger, (owner.clone(), token.clone()));
    let client = ReliefLedgerClient::new(&env, &contract_id);
    (env, client, owner, token)
}

fn fund(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

fn text(env: &Env, s: &str) -> String {
    String::from_str(env, s)
}

#[test]
fn test_constructor_fixes_owner_and_token() {
    let (_env, client, owner, token) = setup();
    assert_eq!(client.owner(), owner);
    assert_eq!(client.token(), token);
    assert_eq!(client.get_total_donations(), 0);
    assert_eq!(client.get_total_expenditures(), 0);
}

#[test]
fn test_donate() {
    let (env, client, _owner, token) = setup();
    let user1 = Address::generate(&env);
    fund(&env, &token, &user1, 1_000);

    let id = client.donate(&user1, &100, &text(&env, "General fund"));
    assert_eq!(id, 1);

    let donation = client.get_donation(&id).unwrap();
    assert_donation_valid(&donation);
    assert_eq!(donation.donor, user1);
    assert_eq!(donation.amount, 100);
    assert_eq!(donation.purpose, text(&env, "General fund"));
    assert_eq!(donation.status, text(&env, "received"));
}

#[test]
fn test_donate_debits_balance_into_custody() {
    let (env, client, _owner, token) = setup();
    let donor = Address::generate(&env);
    fund(&env, &token, &donor, 1_000);

    client.donate(&donor, &400, &text(&env, "Shelter construction"));

    assert_eq!(client.balance_of(&donor), 600);
    assert_eq!(token::Client::new(&env, &token).balance(&client.address), 400);
}

#[test]
fn test_donate_insufficient_balance() {
    let (env, client, _owner, token) = setup();
    let user1 = Address::generate(&env);
    fund(&env, &token, &user1, 50);

    let result = client.try_donate(&user1, &100, &text(&env, "Emergency relief"));
    assert_eq!(result, Err(Ok(Error::InsufficientBalance)));

    assert_eq!(client.balance_of(&user1), 50);
    assert_eq!(client.get_total_donations(), 0);
}

#[test]
fn test_donate_rejects_non_positive_amount() {
    let (env, client, _owner, token) = setup();
    let donor = Address::generate(&env);
    fund(&env, &token, &donor, 1_000);

    for amount in [0i128, -1, -500] {
        let result = client.try_donate(&donor, &amount, &text(&env, "General fund"));
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));
    }

    assert_eq!(client.balance_of(&donor), 1_000);
    assert_eq!(client.get_total_donations(), 0);
}

#[test]
fn test_donate_exact_balance() {
    let (env, client, _owner, token) = setup();
    let donor = Address::generate(&env);
    fund(&env, &token, &donor, 250);

    let before = client.balance_of(&donor);
    client.donate(&donor, &250, &text(&env, "Water purification"));
    assert_debit_invariant(before, client.balance_of(&donor), 250, true);
    assert_eq!(client.balance_of(&donor), 0);
}

#[test]
fn test_total_donations_ignores_failed_calls() {
    let (env, client, _owner, token) = setup();
    let user6 = Address::generate(&env);
    fund(&env, &token, &user6, 3_000);

    let first = client.donate(&user6, &1_000, &text(&env, "General fund"));
    assert!(client.try_donate(&user6, &0, &text(&env, "Nothing")).is_err());
    assert!(client
        .try_donate(&user6, &10_000, &text(&env, "Too much"))
        .is_err());
    let second = client.donate(&user6, &500, &text(&env, "Emergency relief"));

    assert_sequential_ids(&[first, second]);
    assert_eq!(client.get_total_donations(), 2);
    assert_eq!(client.balance_of(&user6), 1_500);
}

#[test]
fn test_update_donation_status() {
    let (env, client, owner, token) = setup();
    let user4 = Address::generate(&env);
    fund(&env, &token, &user4, 1_000);
    let id = client.donate(&user4, &200, &text(&env, "Shelter construction"));

    client.update_donation_status(&owner, &id, &text(&env, "allocated"));

    let donation = client.get_donation(&id).unwrap();
    assert_eq!(donation.status, text(&env, "allocated"));
    assert_eq!(donation.amount, 200);
    assert_eq!(donation.donor, user4);
}

#[test]
fn test_update_donation_status_unauthorized() {
    let (env, client, _owner, token) = setup();
    let donor = Address::generate(&env);
    fund(&env, &token, &donor, 1_000);
    let id = client.donate(&donor, &200, &text(&env, "Shelter construction"));

    // Not even the donor may change the status.
    let result = client.try_update_donation_status(&donor, &id, &text(&env, "disbursed"));
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    assert_eq!(
        client.get_donation(&id).unwrap().status,
        text(&env, "received")
    );
}

#[test]
fn test_update_donation_status_not_found() {
    let (env, client, owner, _token) = setup();
    let result = client.try_update_donation_status(&owner, &7, &text(&env, "allocated"));
    assert_eq!(result, Err(Ok(Error::NotFound)));
}

#[test]
fn test_update_status_checks_authorization_before_existence() {
    let (env, client, _owner, _token) = setup();
    let stranger = Address::generate(&env);
    let result = client.try_update_donation_status(&stranger, &7, &text(&env, "allocated"));
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_record_expenditure() {
    let (env, client, owner, _token) = setup();
    let id = client.record_expenditure(&owner, &500, &text(&env, "Medical supplies"), &1);
    assert_eq!(id, 1);

    let expenditure = client.get_expenditure(&id).unwrap();
    assert_expenditure_valid(&expenditure);
    assert_eq!(expenditure.amount, 500);
    assert_eq!(expenditure.need_ref, 1);
    assert_eq!(expenditure.status, text(&env, "recorded"));
}

#[test]
fn test_record_expenditure_unauthorized() {
    let (env, client, _owner, _token) = setup();
    let user3 = Address::generate(&env);
    let result = client.try_record_expenditure(&user3, &300, &text(&env, "Food distribution"), &2);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    assert_eq!(client.get_total_expenditures(), 0);
}

#[test]
fn test_record_expenditure_invalid_amount() {
    let (env, client, owner, _token) = setup();
    let result = client.try_record_expenditure(&owner, &0, &text(&env, "Food distribution"), &2);
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));

    // A non-owner is turned away before the amount is looked at.
    let user = Address::generate(&env);
    let result = client.try_record_expenditure(&user, &-5, &text(&env, "Food distribution"), &2);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));

    assert_eq!(client.get_total_expenditures(), 0);
}

#[test]
fn test_expenditure_need_ref_is_not_validated() {
    let (env, client, owner, _token) = setup();
    let id = client.record_expenditure(&owner, &700, &text(&env, "Temporary housing"), &9_999);
    assert_eq!(client.get_expenditure(&id).unwrap().need_ref, 9_999);
    assert_eq!(client.get_total_needs(), 0);
}

#[test]
fn test_update_expenditure_status() {
    let (env, client, owner, _token) = setup();
    let id = client.record_expenditure(&owner, &400, &text(&env, "Water purification"), &3);

    client.update_expenditure_status(&owner, &id, &text(&env, "completed"));
    assert_eq!(
        client.get_expenditure(&id).unwrap().status,
        text(&env, "completed")
    );

    let result = client.try_update_expenditure_status(&owner, &2, &text(&env, "completed"));
    assert_eq!(result, Err(Ok(Error::NotFound)));

    let user = Address::generate(&env);
    let result = client.try_update_expenditure_status(&user, &id, &text(&env, "void"));
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_get_total_expenditures() {
    let (env, client, owner, _token) = setup();
    client.record_expenditure(&owner, &700, &text(&env, "Medical supplies"), &5);
    client.record_expenditure(&owner, &300, &text(&env, "Food distribution"), &6);
    assert_eq!(client.get_total_expenditures(), 2);
}

#[test]
fn test_missing_records_read_as_none() {
    let (_env, client, _owner, _token) = setup();
    assert_eq!(client.get_donation(&1), None);
    assert_eq!(client.get_expenditure(&1), None);
}

#[test]
fn test_get_donation_is_idempotent() {
    let (env, client, _owner, token) = setup();
    let user5 = Address::generate(&env);
    fund(&env, &token, &user5, 2_000);
    let id = client.donate(&user5, &500, &text(&env, "Education fund"));

    let first = client.get_donation(&id);
    let second = client.get_donation(&id);
    assert_eq!(first, second);
    assert_eq!(first.unwrap().amount, 500);
}
