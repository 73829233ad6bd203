use alloy::primitives::{Address, B256};

/// A transaction held in the pool, already recovered to its signer.
#[derive(Clone, Debug)]
pub struct PooledTransaction {
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub to_addr: Option<Address>,
    pub amount: u128,
    pub payload: Vec<u8>,
    pub sig: EthSignature,
    pub hash: B256,
    pub signer: Address,
}

/// The ECDSA components of a transaction's signature. `r` and `s` may be empty for
/// transactions whose signature has not been recorded in full.
#[derive(Clone, Debug, Default)]
pub struct EthSignature {
    pub v: u64,
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}
