use alloy_primitives::{Address, B256, U256};

/// Width of an EVM storage word in bytes.
pub const WORD_SIZE: usize = 32;

/// Left-pad `bytes` with zeros to `size`, or keep only the trailing `size` bytes when longer.
///
/// This is the big-endian fixed-width conversion the EVM applies to both addresses and
/// integers. Truncation drops the high-order bytes silently.
pub fn pad_left_or_trim(bytes: &[u8], size: usize) -> Vec<u8> {
    let len = bytes.len();
    if len == size {
        return bytes.to_vec();
    }
    if len > size {
        return bytes[len - size..].to_vec();
    }

    let mut padded = vec![0u8; size];
    padded[size - len..].copy_from_slice(bytes);
    padded
}

/// Convert an arbitrary byte string into a storage word (right-aligned, high bytes trimmed).
pub fn to_word(bytes: &[u8]) -> B256 {
    B256::from_slice(&pad_left_or_trim(bytes, WORD_SIZE))
}

/// Encode a u64 value into a B256 storage value.
pub fn encode_u64(value: u64) -> B256 {
    B256::from(U256::from(value).to_be_bytes())
}

/// Encode a U256 value into a B256 storage value.
pub fn encode_u256(value: U256) -> B256 {
    B256::from(value.to_be_bytes())
}

/// Encode an address into a B256 storage value (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    to_word(addr.as_slice())
}

/// Encode a bool the way Solidity stores it: 1 for true, 0 for false.
pub fn encode_bool(value: bool) -> B256 {
    encode_u64(u64::from(value))
}

/// Decode an address from a B256 storage value (left-padded with zeros).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[12..32])
}

/// Decode a u64 from a B256 storage value.
pub fn decode_u64(value: B256) -> u64 {
    U256::from_be_bytes(value.0).as_limbs()[0]
}

/// Decode a U256 from a B256 storage value.
pub fn decode_u256(value: B256) -> U256 {
    U256::from_be_bytes(value.0)
}

/// Decode a bool from a B256 storage value.
pub fn decode_bool(value: B256) -> bool {
    value != B256::ZERO
}
