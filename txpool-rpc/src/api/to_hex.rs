use alloy::primitives::{Address, B256};

/// A version of [hex::ToHex] which is also implemented for integer types. This version also prefixes the produced
/// string with `"0x"` and omits leading zeroes for quantities (types without fixed lengths).
pub trait ToHex {
    fn to_hex_inner(&self, prefix: bool) -> String;

    fn to_hex(&self) -> String {
        self.to_hex_inner(true)
    }

    fn to_hex_no_prefix(&self) -> String {
        self.to_hex_inner(false)
    }
}

/// Generates an implementation of [ToHex] for types which implement `AsRef<[u8]>`.
macro_rules! as_ref_impl {
    ($T:ty) => {
        impl ToHex for $T {
            fn to_hex_inner(&self, prefix: bool) -> String {
                if prefix {
                    format!("0x{}", hex::encode(self))
                } else {
                    hex::encode(self)
                }
            }
        }
    };
}

/// Generates an implementation of [ToHex] for types which implement [std::fmt::LowerHex].
macro_rules! int_impl {
    ($T:ty) => {
        impl ToHex for $T {
            fn to_hex_inner(&self, prefix: bool) -> String {
                if prefix {
                    format!("{:#x}", self)
                } else {
                    format!("{:x}", self)
                }
            }
        }
    };
}

impl<T: ToHex> ToHex for &T {
    fn to_hex_inner(&self, prefix: bool) -> String {
        (*self).to_hex_inner(prefix)
    }
}

impl<const N: usize> ToHex for [u8; N] {
    fn to_hex_inner(&self, prefix: bool) -> String {
        self.as_ref().to_hex_inner(prefix)
    }
}

as_ref_impl!(str);
as_ref_impl!(String);
as_ref_impl!([u8]);
as_ref_impl!(Vec<u8>);
as_ref_impl!(Address);
as_ref_impl!(B256);

int_impl!(u8);
int_impl!(u16);
int_impl!(u32);
int_impl!(u64);
int_impl!(u128);
int_impl!(usize);
