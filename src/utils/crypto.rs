//! Simulated wallet cryptography for teaching purposes.
//!
//! Nothing here is real public-key cryptography. Keys are random hex strings
//! and a "signature" is one SHA-256 over the document hash and a slice of the
//! private key. SHA-256 itself is real and must match the standard vectors.

use rand::{rngs::StdRng, Rng, SeedableRng};
use sha2::{Digest, Sha256};
use crate::models::KeyPair;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

pub const PRIVATE_KEY_PREFIX: &str = "priv_";
pub const PUBLIC_KEY_PREFIX: &str = "pub_";
pub const ADDRESS_PREFIX: &str = "0x";
pub const SIGNATURE_PREFIX: &str = "sig_";

pub const KEY_HEX_LEN: usize = 64;
pub const ADDRESS_HEX_LEN: usize = 40;
pub const SIGNATURE_HEX_LEN: usize = 64;

/// UTF-16 code unit range of the private key mixed into a signature.
const SIGNING_KEY_START: usize = 5;
const SIGNING_KEY_END: usize = 20;

/// Source of randomness for key generation.
pub trait RandomSource {
    /// Returns a value drawn uniformly from `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

/// The per-thread generator from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Reproducible generator, used by tests and `generate_wallet --seed`.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

pub fn generate_random_hex_with<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| HEX_CHARS[rng.next_below(HEX_CHARS.len())] as char)
        .collect()
}

/// `length` uppercase hex digits from the thread-local generator.
pub fn generate_random_hex(length: usize) -> String {
    generate_random_hex_with(&mut ThreadRandom, length)
}

pub fn generate_key_pair_with<R: RandomSource + ?Sized>(rng: &mut R) -> KeyPair {
    let private_key = format!("{}{}", PRIVATE_KEY_PREFIX, generate_random_hex_with(rng, KEY_HEX_LEN));
    let public_key = format!("{}{}", PUBLIC_KEY_PREFIX, generate_random_hex_with(rng, KEY_HEX_LEN));
    let address = format!("{}{}", ADDRESS_PREFIX, generate_random_hex_with(rng, ADDRESS_HEX_LEN));

    KeyPair {
        private_key,
        public_key,
        address,
    }
}

pub fn generate_key_pair() -> KeyPair {
    generate_key_pair_with(&mut ThreadRandom)
}

/// SHA-256 of the UTF-8 bytes of `content`, as 64 uppercase hex digits.
pub fn generate_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// UTF-16 code units `start..end` of `s`, clamped like JS `slice`. A
/// surrogate pair cut in half becomes U+FFFD, as a browser's `TextEncoder`
/// would encode it.
fn utf16_slice(s: &str, start: usize, end: usize) -> String {
    let units: Vec<u16> = s.encode_utf16().collect();
    let end = end.min(units.len());
    let start = start.min(end);
    String::from_utf16_lossy(&units[start..end])
}

/// Deterministic toy signature over an already computed document hash.
pub fn sign_document(hash: &str, private_key: &str) -> String {
    let combined = format!("{}{}", hash, utf16_slice(private_key, SIGNING_KEY_START, SIGNING_KEY_END));
    let signature_hash = generate_hash(&combined);
    format!("{}{}", SIGNATURE_PREFIX, &signature_hash[..SIGNATURE_HEX_LEN])
}

/// Recomputes the signature from the document and the original private key.
///
/// `_public_key` is accepted to mirror the verifier form but plays no part in
/// the comparison: a toy signature can only be checked by whoever holds the
/// private key that produced it.
pub fn verify_signature(
    document: &str,
    _public_key: &str,
    signature: &str,
    original_private_key: &str,
) -> bool {
    let document_hash = generate_hash(document);
    let expected_signature = sign_document(&document_hash, original_private_key);
    signature == expected_signature
}

/// Shape check used when no private key is available to recompute with.
/// Length is measured in UTF-16 code units.
pub fn check_signature_format(signature: &str) -> bool {
    signature.starts_with(SIGNATURE_PREFIX)
        && signature.encode_utf16().count() == SIGNATURE_PREFIX.len() + SIGNATURE_HEX_LEN
}
