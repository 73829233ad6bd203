use alloy::primitives::{Address, B256};
use serde::Serialize;

use super::{hex, option_hex};
use crate::{store::BlockContext, transaction::PooledTransaction};

/// A transaction object, returned by the txpool API.
///
/// One record type serves both views of the pool: the placement fields (`block_hash`,
/// `block_number` and `transaction_index`) are `None` for a pending transaction, which
/// serializes as `null`, and always populated for a queued one.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(serialize_with = "option_hex")]
    pub block_hash: Option<B256>,
    #[serde(serialize_with = "option_hex")]
    pub block_number: Option<u64>,
    #[serde(serialize_with = "hex")]
    pub from: Address,
    #[serde(serialize_with = "hex")]
    pub gas: u64,
    #[serde(serialize_with = "hex")]
    pub gas_price: u128,
    #[serde(serialize_with = "hex")]
    pub hash: B256,
    #[serde(serialize_with = "hex")]
    pub input: Vec<u8>,
    #[serde(serialize_with = "hex")]
    pub nonce: u64,
    #[serde(serialize_with = "option_hex")]
    pub to: Option<Address>,
    #[serde(serialize_with = "option_hex")]
    pub transaction_index: Option<u64>,
    #[serde(serialize_with = "hex")]
    pub value: u128,
    #[serde(serialize_with = "hex")]
    pub v: u64,
    #[serde(serialize_with = "hex")]
    pub r: Vec<u8>,
    #[serde(serialize_with = "hex")]
    pub s: Vec<u8>,
}

impl Transaction {
    /// Build the record for a transaction which is not yet positioned in a block.
    pub fn pending(tx: &PooledTransaction) -> Transaction {
        Self::build(tx, None)
    }

    /// Build the record for a queued transaction, annotated with the block it was last
    /// associated with. The true position within that block is not tracked, so the
    /// caller supplies `tx_index`.
    pub fn queued(tx: &PooledTransaction, block: BlockContext, tx_index: u64) -> Transaction {
        Self::build(tx, Some((block, tx_index)))
    }

    fn build(tx: &PooledTransaction, placement: Option<(BlockContext, u64)>) -> Transaction {
        Transaction {
            block_hash: placement.as_ref().map(|(block, _)| block.hash),
            block_number: placement.as_ref().map(|(block, _)| block.number),
            from: tx.signer,
            gas: tx.gas_limit,
            gas_price: tx.gas_price,
            hash: tx.hash,
            input: tx.payload.clone(),
            nonce: tx.nonce,
            to: tx.to_addr,
            transaction_index: placement.map(|(_, index)| index),
            value: tx.amount,
            v: tx.sig.v,
            r: or_zero_byte(&tx.sig.r),
            s: or_zero_byte(&tx.sig.s),
        }
    }
}

/// An empty r or s is encoded as a single zero byte, so the field is still present on
/// the wire. This says nothing about the validity of the signature.
fn or_zero_byte(bytes: &[u8]) -> Vec<u8> {
    if bytes.is_empty() {
        vec![0]
    } else {
        bytes.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::B256;

    use super::Transaction;
    use crate::{
        store::BlockContext,
        transaction::{EthSignature, PooledTransaction},
    };

    fn transaction(sig: EthSignature) -> PooledTransaction {
        PooledTransaction {
            nonce: 7,
            gas_price: 2,
            gas_limit: 21_000,
            to_addr: None,
            amount: 1,
            payload: vec![],
            sig,
            hash: B256::repeat_byte(9),
            signer: "0x0000000000000000000000000000000000001234"
                .parse()
                .unwrap(),
        }
    }

    #[test]
    fn empty_signature_components_default_to_a_zero_byte() {
        let tx = transaction(EthSignature {
            v: 27,
            r: vec![],
            s: vec![],
        });

        let txn = Transaction::pending(&tx);

        assert_eq!(txn.r, vec![0]);
        assert_eq!(txn.s, vec![0]);
    }

    #[test]
    fn present_signature_components_are_preserved() {
        let tx = transaction(EthSignature {
            v: 28,
            r: vec![1; 32],
            s: vec![2; 32],
        });

        let txn = Transaction::pending(&tx);

        assert_eq!(txn.r, vec![1; 32]);
        assert_eq!(txn.s, vec![2; 32]);
    }

    #[test]
    fn pending_records_have_no_placement() {
        let txn = Transaction::pending(&transaction(EthSignature::default()));

        assert_eq!(txn.block_hash, None);
        assert_eq!(txn.block_number, None);
        assert_eq!(txn.transaction_index, None);
    }

    #[test]
    fn queued_records_carry_their_placement() {
        let block = BlockContext {
            hash: B256::repeat_byte(3),
            number: 5,
        };

        let txn = Transaction::queued(&transaction(EthSignature::default()), block, 0);

        assert_eq!(txn.block_hash, Some(block.hash));
        assert_eq!(txn.block_number, Some(5));
        assert_eq!(txn.transaction_index, Some(0));
    }
}
