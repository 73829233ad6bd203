use std::collections::HashMap;

use alloy::primitives::Address;
use serde::Serialize;

use super::eth::Transaction;

/// Both sets are always present in the response, even when empty.
#[derive(Clone, Serialize)]
pub struct TxPoolContent {
    pub pending: HashMap<Address, HashMap<u64, Transaction>>,
    pub queued: HashMap<Address, HashMap<u64, Transaction>>,
}

/// Keys are the checksummed address and the decimal nonce.
#[derive(Clone, Serialize)]
pub struct TxPoolInspect {
    pub pending: HashMap<String, HashMap<String, String>>,
    pub queued: HashMap<String, HashMap<String, String>>,
}

#[derive(Clone, Serialize)]
pub struct TxPoolStatus {
    pub pending: u64,
    pub queued: u64,
}
