use alloy::primitives::B256;

#[derive(Clone, Debug)]
pub struct BlockHeader {
    pub hash: B256,
    pub number: u64,
}

/// A block, as consumed by this crate. Only the identity of the block matters here; the
/// body lives in the block store.
#[derive(Clone, Debug)]
pub struct Block {
    pub header: BlockHeader,
}

impl Block {
    pub fn hash(&self) -> B256 {
        self.header.hash
    }

    pub fn number(&self) -> u64 {
        self.header.number
    }
}
