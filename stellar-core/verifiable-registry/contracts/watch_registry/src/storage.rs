use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Watch {
    pub id: u128,
    pub metadata_uri: String,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRequest {
    pub id: u128,
    pub metadata_uri: String,
    pub requester: Address,
    pub payment: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Authority,
    FeeToken,
    MinFee,
    HeldFees,
    Pending,
    Watch(u128),
}

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const WATCH_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const WATCH_LIFETIME_THRESHOLD: u32 = WATCH_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_authority(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Authority)
}

pub fn get_authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Authority)
}

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::Authority, authority);
}

pub fn get_fee_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::FeeToken)
}

pub fn set_fee_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FeeToken, token);
}

pub fn get_min_fee(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::MinFee)
}

pub fn set_min_fee(env: &Env, min_fee: i128) {
    env.storage().instance().set(&DataKey::MinFee, &min_fee);
}

pub fn get_held_fees(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::HeldFees).unwrap_or(0)
}

pub fn set_held_fees(env: &Env, held: i128) {
    env.storage().instance().set(&DataKey::HeldFees, &held);
}

// Single slot for the whole registry, not one per watch id.
pub fn get_pending(env: &Env) -> Option<PendingRequest> {
    env.storage().instance().get(&DataKey::Pending)
}

pub fn set_pending(env: &Env, pending: &PendingRequest) {
    env.storage().instance().set(&DataKey::Pending, pending);
}

pub fn clear_pending(env: &Env) {
    env.storage().instance().remove(&DataKey::Pending);
}

pub fn get_watch(env: &Env, id: u128) -> Option<Watch> {
    env.storage().persistent().get(&DataKey::Watch(id))
}

pub fn set_watch(env: &Env, watch: &Watch) {
    let key = DataKey::Watch(watch.id);
    env.storage().persistent().set(&key, watch);
    env.storage()
        .persistent()
        .extend_ttl(&key, WATCH_LIFETIME_THRESHOLD, WATCH_BUMP_AMOUNT);
}
