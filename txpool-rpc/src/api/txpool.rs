use std::{collections::HashMap, sync::Arc};

use alloy::primitives::Address;
use anyhow::Result;
use jsonrpsee::{RpcModule, types::Params};

use super::types;
use crate::{
    cfg::EnabledApi,
    store::{Store, resolve_block_context},
    transaction::PooledTransaction,
};

pub fn rpc_module<S: Store + Send + Sync + 'static>(
    store: Arc<S>,
    enabled_apis: &[EnabledApi],
) -> RpcModule<Arc<S>> {
    super::declare_module!(
        store,
        enabled_apis,
        [
            ("txpool_content", txpool_content),
            ("txpool_contentFrom", txpool_content_from),
            ("txpool_inspect", txpool_inspect),
            ("txpool_status", txpool_status),
        ]
    )
}

/// txpool_content
fn txpool_content<S: Store>(
    _params: Params,
    store: &Arc<S>,
) -> Result<types::txpool::TxPoolContent> {
    let snapshot = store.get_txs();

    let pending: HashMap<_, _> = snapshot
        .pending
        .iter()
        .map(|(address, txns)| {
            (
                *address,
                txns.iter()
                    .map(|(nonce, tx)| (*nonce, types::eth::Transaction::pending(tx)))
                    .collect::<HashMap<u64, _>>(),
            )
        })
        .collect();

    let queued: HashMap<_, _> = snapshot
        .queued
        .iter()
        .map(|(address, txns)| {
            (
                *address,
                txns.iter()
                    .map(|(nonce, tx)| {
                        let block = resolve_block_context(store.as_ref(), tx.hash);
                        // The position within the historical block is not tracked, so
                        // queued records always report index 0.
                        (*nonce, types::eth::Transaction::queued(tx, block, 0))
                    })
                    .collect::<HashMap<u64, _>>(),
            )
        })
        .collect();

    Ok(types::txpool::TxPoolContent { pending, queued })
}

/// txpool_contentFrom
fn txpool_content_from<S: Store>(
    params: Params,
    store: &Arc<S>,
) -> Result<types::txpool::TxPoolContent> {
    let address: Address = params.one()?;
    let snapshot = store.get_txs();

    let mut result = types::txpool::TxPoolContent {
        pending: HashMap::new(),
        queued: HashMap::new(),
    };

    if let Some(txns) = snapshot.pending.get(&address) {
        let entries = result.pending.entry(address).or_default();
        for (nonce, tx) in txns {
            entries.insert(*nonce, types::eth::Transaction::pending(tx));
        }
    }

    if let Some(txns) = snapshot.queued.get(&address) {
        let entries = result.queued.entry(address).or_default();
        for (nonce, tx) in txns {
            let block = resolve_block_context(store.as_ref(), tx.hash);
            entries.insert(*nonce, types::eth::Transaction::queued(tx, block, 0));
        }
    }

    Ok(result)
}

/// txpool_inspect
fn txpool_inspect<S: Store>(
    _params: Params,
    store: &Arc<S>,
) -> Result<types::txpool::TxPoolInspect> {
    let snapshot = store.get_txs();

    let mut result = types::txpool::TxPoolInspect {
        pending: HashMap::new(),
        queued: HashMap::new(),
    };

    for (address, txns) in &snapshot.pending {
        let entries = result.pending.entry(address.to_string()).or_default();
        for (nonce, tx) in txns {
            entries.insert(nonce.to_string(), inspect_summary(tx));
        }
    }

    for (address, txns) in &snapshot.queued {
        let entries = result.queued.entry(address.to_string()).or_default();
        for (nonce, tx) in txns {
            entries.insert(nonce.to_string(), inspect_summary(tx));
        }
    }

    Ok(result)
}

/// A one-line, value-and-cost summary of a transaction.
fn inspect_summary(tx: &PooledTransaction) -> String {
    format!(
        "{} wei + {} gas x {} wei",
        tx.amount, tx.gas_limit, tx.gas_price
    )
}

/// txpool_status
fn txpool_status<S: Store>(_params: Params, store: &Arc<S>) -> Result<types::txpool::TxPoolStatus> {
    fn count(set: &HashMap<Address, HashMap<u64, PooledTransaction>>) -> u64 {
        set.values().map(|txns| txns.len() as u64).sum()
    }

    let snapshot = store.get_txs();

    Ok(types::txpool::TxPoolStatus {
        pending: count(&snapshot.pending),
        queued: count(&snapshot.queued),
    })
}
