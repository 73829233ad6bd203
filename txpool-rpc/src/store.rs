use alloy::primitives::B256;
use anyhow::Result;

use crate::{message::Block, pool::TxPoolSnapshot};

/// The node-side collaborators this API layer reads from: the transaction pool and the
/// block store. Implementations own any locking; each call returns an independent view.
pub trait Store {
    /// The current content of the pool.
    fn get_txs(&self) -> TxPoolSnapshot;

    /// The hash of the block a transaction was included in, if indexed.
    fn read_tx_lookup(&self, tx_hash: B256) -> Result<Option<B256>>;

    /// Fetch a block by its hash.
    fn get_block_by_hash(&self, hash: B256) -> Result<Option<Block>>;
}

/// The block a transaction is historically associated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockContext {
    pub hash: B256,
    pub number: u64,
}

/// Resolve the block context for a transaction hash.
///
/// This never fails: a missing lookup entry, a missing block (the genesis block is not
/// independently retrievable) or a store error all degrade to a stub context with block
/// number zero, so the introspection endpoints stay available when historical data is
/// incomplete.
pub fn resolve_block_context<S: Store + ?Sized>(store: &S, tx_hash: B256) -> BlockContext {
    let block_hash = store
        .read_tx_lookup(tx_hash)
        .ok()
        .flatten()
        .unwrap_or_default();
    match store.get_block_by_hash(block_hash).ok().flatten() {
        Some(block) => BlockContext {
            hash: block.hash(),
            number: block.number(),
        },
        None => BlockContext {
            hash: block_hash,
            number: 0,
        },
    }
}
