//! # Balance ledger
//!
//! Donor balances are held by the asset contract named in the contract
//! configuration. A donation debits the donor by transferring the amount
//! into contract custody; the check and the transfer run inside the same
//! invocation as the record write, so they commit or fail together.

use soroban_sdk::{token, Address, Env};

use crate::storage;
use crate::Error;

/// Spendable balance of `holder`.
pub fn balance_of(env: &Env, holder: &Address) -> i128 {
    let config = storage::get_config(env);
    token::Client::new(env, &config.token).balance(holder)
}

/// Debit `amount` from `from`, only if the balance covers it.
pub fn debit(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let config = storage::get_config(env);
    let client = token::Client::new(env, &config.token);

    if client.balance(from) < amount {
        return Err(Error::InsufficientBalance);
    }

    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}
