//! Events published by the registry, one per state transition.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const INIT: Symbol = symbol_short!("init");
const REQUEST: Symbol = symbol_short!("request");
const SUPERSEDE: Symbol = symbol_short!("supersede");
const APPROVED: Symbol = symbol_short!("approved");
const REJECTED: Symbol = symbol_short!("rejected");
const TRANSFER: Symbol = symbol_short!("transfer");
const METADATA: Symbol = symbol_short!("metadata");

pub fn emit_initialized(env: &Env, authority: &Address, fee_token: &Address, min_fee: i128) {
    env.events().publish(
        (INIT,),
        (authority.clone(), fee_token.clone(), min_fee),
    );
}

pub fn emit_requested(
    env: &Env,
    id: u128,
    requester: &Address,
    metadata_uri: &String,
    payment: i128,
) {
    env.events().publish(
        (REQUEST, id),
        (requester.clone(), metadata_uri.clone(), payment),
    );
}

/// A pending request was overwritten before the authority resolved it.
pub fn emit_superseded(env: &Env, id: u128, requester: &Address, payment: i128) {
    env.events()
        .publish((SUPERSEDE, id), (requester.clone(), payment));
}

pub fn emit_approved(env: &Env, id: u128, owner: &Address, metadata_uri: &String) {
    env.events()
        .publish((APPROVED, id), (owner.clone(), metadata_uri.clone()));
}

pub fn emit_rejected(env: &Env, id: u128, requester: &Address) {
    env.events().publish((REJECTED, id), requester.clone());
}

pub fn emit_transferred(env: &Env, id: u128, from: &Address, to: &Address) {
    env.events()
        .publish((TRANSFER, id), (from.clone(), to.clone()));
}

pub fn emit_metadata_updated(env: &Env, id: u128, metadata_uri: &String) {
    env.events().publish((METADATA, id), metadata_uri.clone());
}
