use serde::{Deserialize, Serialize};

/// A simulated wallet. The three fields are independent random draws,
/// there is no mathematical relationship between them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub private_key: String,
    pub public_key: String,
    pub address: String,
}

/// Wallet as shown on the generator panel: truncated fields and the
/// private key masked unless explicitly revealed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletDisplay {
    pub address: String,
    pub public_key: String,
    pub private_key: String,
    pub private_key_revealed: bool,
}
