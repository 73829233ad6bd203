use serde::Serializer;

use super::to_hex::ToHex;

pub mod eth;
pub mod txpool;

pub fn hex<S: Serializer, T: ToHex>(data: T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&data.to_hex())
}

pub fn option_hex<S: Serializer, T: ToHex>(
    data: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if let Some(data) = data {
        serializer.serialize_some(&data.to_hex())
    } else {
        serializer.serialize_none()
    }
}
