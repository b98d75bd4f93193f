//! # Shared Utility Functions
//!
//! Display helpers used across the frontend.
//!
//! ## Address Formatting
//!
//! Functions for formatting Ethereum wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the site's default lengths
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x742d35Cc6634C0532925a3b8D4C9E4F3b3c75d8e";
//! assert_eq!(format_address(address, 6, 4), "0x742d…5d8e");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters, joined with an ellipsis.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b8D4C9E4F3b3c75d8e";
/// assert_eq!(format_address(addr, 6, 4), "0x742d…5d8e");
/// assert_eq!(format_address(addr, 10, 6), "0x742d35Cc…c75d8e");
/// assert_eq!(format_address("0xabcd", 6, 4), "0xabcd");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against lengths that would overlap or exceed the address,
    // which would otherwise panic when slicing.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Hex addresses are ASCII-only, so byte indexing is safe here.
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{prefix}…{suffix}")
}

/// Format a wallet address with the site's default 6-character prefix
/// (covering the `0x` tag) and 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(
///     truncate_address("0x742d35Cc6634C0532925a3b8D4C9E4F3b3c75d8e"),
///     "0x742d…5d8e"
/// );
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x742d35Cc6634C0532925a3b8D4C9E4F3b3c75d8e";
        assert_eq!(format_address(addr, 6, 4), "0x742d…5d8e");
        assert_eq!(format_address(addr, 4, 4), "0x74…5d8e");
        assert_eq!(format_address(addr, 2, 2), "0x…8e");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xabcd", 6, 4), "0xabcd");
        assert_eq!(format_address("abc", 4, 4), "abc");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x742d35Cc6634C0532925a3b8D4C9E4F3b3c75d8e"),
            "0x742d…5d8e"
        );
    }
}
