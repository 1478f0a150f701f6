//! # Shared Utility Functions
//!
//! Helpers used by both the data service and the web front-end.
//!
//! ## Address Formatting
//!
//! Mint and wallet addresses are base58 strings of 32-44 characters, too long
//! for table cells:
//! - [`format_address`] - Keep the first N and last M characters
//! - [`truncate_address`] - [`format_address`] with a 4/4 split
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let mint = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
//! assert_eq!(format_address(mint, 4, 4), "DezX...B263");
//! ```

/// Shorten an address to its first `prefix_len` and last `suffix_len` characters.
///
/// Addresses that would not get shorter are returned unchanged. Counting is
/// done in characters, so non-ASCII input never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let mint = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
/// assert_eq!(format_address(mint, 6, 6), "DezXAZ...pPB263");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len + 3 {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an address with the default 4-character prefix and suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("So11111111111111111111111111111111111111112"), "So11...1112");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
