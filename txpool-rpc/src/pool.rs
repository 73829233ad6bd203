use std::collections::HashMap;

use alloy::primitives::Address;

use crate::transaction::PooledTransaction;

/// A point-in-time view of the pool, split into its pending and queued sets.
///
/// Pending transactions are eligible for inclusion in the next block; queued
/// transactions are held back (typically by a nonce gap) until the pool promotes them.
/// Within each set, nonce keys are unique per address. Consecutive snapshots are
/// independent and need not be consistent with each other.
#[derive(Clone, Debug, Default)]
pub struct TxPoolSnapshot {
    pub pending: HashMap<Address, HashMap<u64, PooledTransaction>>,
    pub queued: HashMap<Address, HashMap<u64, PooledTransaction>>,
}
