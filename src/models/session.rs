use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::models::{KeyPair, VerificationResult, WalletDisplay};
use crate::utils::display::wallet_display;

/// Transient state of one simulator page: the wallet panel, the signer
/// panel and the verifier panel.
#[derive(Debug, Clone)]
pub struct SimulatorSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub wallet: Option<KeyPair>,

    // signer panel
    pub document: String,
    pub hash: Option<String>,
    pub signature: Option<String>,

    // verifier panel
    pub received_document: String,
    pub received_public_key: String,
    pub received_signature: String,
    pub verification: VerificationResult,
}

impl SimulatorSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            wallet: None,
            document: String::new(),
            hash: None,
            signature: None,
            received_document: String::new(),
            received_public_key: String::new(),
            received_signature: String::new(),
            verification: VerificationResult::Unknown,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn view(&self, reveal_private_key: bool) -> SessionView {
        SessionView {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            wallet: self
                .wallet
                .as_ref()
                .map(|wallet| wallet_display(wallet, reveal_private_key)),
            document: self.document.clone(),
            hash: self.hash.clone(),
            signature: self.signature.clone(),
            received_document: self.received_document.clone(),
            received_public_key: self.received_public_key.clone(),
            received_signature: self.received_signature.clone(),
            verification: self.verification,
        }
    }
}

impl Default for SimulatorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletDisplay>,
    pub document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub received_document: String,
    pub received_public_key: String,
    pub received_signature: String,
    pub verification: VerificationResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionQuery {
    #[serde(default)]
    pub reveal: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    pub document: String,
}

/// Any field left out keeps its current value.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVerifierRequest {
    pub received_document: Option<String>,
    pub received_public_key: Option<String>,
    pub received_signature: Option<String>,
}
