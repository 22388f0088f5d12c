use crate::models::{KeyPair, WalletDisplay};

pub const DEFAULT_START_CHARS: usize = 10;
pub const DEFAULT_END_CHARS: usize = 6;

// Widths used by the wallet panel
const ADDRESS_WIDTH: (usize, usize) = (8, 8);
const PUBLIC_KEY_WIDTH: (usize, usize) = (12, 8);
const PRIVATE_KEY_WIDTH: (usize, usize) = (12, 8);

const PRIVATE_KEY_MASK_LEN: usize = 24;

/// Shortens `key` to `start_chars` + "..." + `end_chars`, unless that would
/// not make it any shorter.
pub fn truncate_key(key: &str, start_chars: usize, end_chars: usize) -> String {
    let len = key.chars().count();
    if len <= start_chars.saturating_add(end_chars).saturating_add(3) {
        return key.to_string();
    }

    let head: String = key.chars().take(start_chars).collect();
    let tail: String = key.chars().skip(len - end_chars).collect();
    format!("{}...{}", head, tail)
}

pub fn mask_private_key() -> String {
    "•".repeat(PRIVATE_KEY_MASK_LEN)
}

pub fn wallet_display(wallet: &KeyPair, reveal_private_key: bool) -> WalletDisplay {
    let private_key = if reveal_private_key {
        truncate_key(&wallet.private_key, PRIVATE_KEY_WIDTH.0, PRIVATE_KEY_WIDTH.1)
    } else {
        mask_private_key()
    };

    WalletDisplay {
        address: truncate_key(&wallet.address, ADDRESS_WIDTH.0, ADDRESS_WIDTH.1),
        public_key: truncate_key(&wallet.public_key, PUBLIC_KEY_WIDTH.0, PUBLIC_KEY_WIDTH.1),
        private_key,
        private_key_revealed: reveal_private_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_key() {
        assert_eq!(truncate_key("abcdefghijklmnopqrstuvwxyz", 10, 6), "abcdefghij...uvwxyz");
        assert_eq!(truncate_key("short", 10, 6), "short");
        assert_eq!(truncate_key("", DEFAULT_START_CHARS, DEFAULT_END_CHARS), "");
    }

    #[test]
    fn test_truncate_key_boundary() {
        // exactly start + end + 3 characters stays as is
        let nineteen = "a".repeat(19);
        assert_eq!(truncate_key(&nineteen, 10, 6), nineteen);

        let twenty = "abcdefghijklmnopqrst";
        assert_eq!(truncate_key(twenty, 10, 6), "abcdefghij...opqrst");
    }

    #[test]
    fn test_truncate_key_huge_widths_keep_key() {
        let key = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(truncate_key(key, 0, usize::MAX), key);
        assert_eq!(truncate_key(key, usize::MAX, 0), key);
        assert_eq!(truncate_key(key, usize::MAX, usize::MAX), key);
    }

    #[test]
    fn test_truncate_key_zero_end() {
        // zero end characters keeps no tail, unlike JS `slice(-0)` which
        // would append the whole key
        assert_eq!(truncate_key("abcdefghijklmnop", 4, 0), "abcd...");
    }

    #[test]
    fn test_wallet_display_masks_private_key() {
        let wallet = KeyPair {
            private_key: format!("priv_{}", "A".repeat(64)),
            public_key: format!("pub_{}", "B".repeat(64)),
            address: format!("0x{}", "C".repeat(40)),
        };

        let hidden = wallet_display(&wallet, false);
        assert_eq!(hidden.address, "0xCCCCCC...CCCCCCCC");
        assert_eq!(hidden.public_key, "pub_BBBBBBBB...BBBBBBBB");
        assert_eq!(hidden.private_key, mask_private_key());
        assert_eq!(hidden.private_key.chars().count(), 24);
        assert!(!hidden.private_key_revealed);

        let shown = wallet_display(&wallet, true);
        assert_eq!(shown.private_key, "priv_AAAAAAA...AAAAAAAA");
        assert!(shown.private_key_revealed);
    }
}
