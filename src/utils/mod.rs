pub mod crypto;
pub mod display;

pub use crypto::{
    check_signature_format, generate_hash, generate_key_pair, generate_key_pair_with,
    generate_random_hex, generate_random_hex_with, sign_document, verify_signature,
    RandomSource, SeededRandom, ThreadRandom,
};
pub use display::{mask_private_key, truncate_key, wallet_display, DEFAULT_END_CHARS, DEFAULT_START_CHARS};
