//! Sender identity helpers: address shortening, profile links and the
//! deterministic identicon used for avatars.

/// Default base for avatar profile links; the sender address is appended.
pub const DEFAULT_PROFILE_URL_BASE: &str = "https://etherscan.io/address/";

/// Shorten a hex address to `0x1234…abcd`.
///
/// Only `0x`-prefixed addresses longer than 12 characters are shortened;
/// anything else is returned unchanged.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if !address.starts_with("0x") || chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

/// Profile link for the avatar of `address`.
pub fn profile_url(base: &str, address: &str) -> String {
    format!("{}{}", base, address)
}

/// FNV-1a hash of an address. Same address always yields the same value.
pub fn identity_hash(address: &str) -> u64 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in address.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    hash
}

/// Index into a palette of `palette_len` colors for `address`.
pub fn palette_index(address: &str, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    (identity_hash(address) as usize) % palette_len
}

/// 15-bit pattern for a 5x5 mirrored identicon (3 distinct columns × 5 rows).
/// The center column always has some cells set.
pub fn identicon_pattern(address: &str) -> u16 {
    (identity_hash(address) as u16 & 0x7FFF) | 0x0084
}

/// Whether cell (`row`, `col`) of the 5x5 grid is filled.
pub fn identicon_cell(pattern: u16, row: usize, col: usize) -> bool {
    let pattern_col = if col < 3 { col } else { 4 - col };
    let bit_index = row * 3 + pattern_col;
    pattern & (1 << bit_index) != 0
}
