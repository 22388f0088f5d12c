use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use log::{info, debug};
use thiserror::Error;
use uuid::Uuid;
use crate::models::{SimulatorSession, UpdateVerifierRequest, VerificationResult};
use crate::utils::crypto::{
    check_signature_format, generate_hash, generate_key_pair_with, sign_document, verify_signature,
    RandomSource, ThreadRandom,
};

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Session {0} does not exist")]
    SessionNotFound(Uuid),

    #[error("Too many open sessions (limit {0})")]
    SessionLimit(usize),

    #[error("Write a document before generating its hash")]
    EmptyDocument,

    #[error("Generate a wallet before signing")]
    NoWallet,

    #[error("Generate the document hash before signing")]
    NoHash,

    #[error("Sign a document first")]
    NoSignature,

    #[error("Paste the received document")]
    MissingReceivedDocument,

    #[error("Paste the sender's public key")]
    MissingPublicKey,

    #[error("Paste the received digital signature")]
    MissingSignature,

    #[error("Session store lock poisoned")]
    LockPoisoned,
}

struct SimulatorState {
    sessions: HashMap<Uuid, SimulatorSession>,
    random: Box<dyn RandomSource + Send>,
}

/// In-memory simulator sessions, one per open page.
pub struct SimulatorService {
    state: Mutex<SimulatorState>,
    max_sessions: usize,
}

impl SimulatorService {
    pub fn new(max_sessions: usize) -> Self {
        Self::with_random(max_sessions, Box::new(ThreadRandom))
    }

    pub fn with_random(max_sessions: usize, random: Box<dyn RandomSource + Send>) -> Self {
        Self {
            state: Mutex::new(SimulatorState {
                sessions: HashMap::new(),
                random,
            }),
            max_sessions,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SimulatorState>, SimulatorError> {
        self.state.lock().map_err(|_| SimulatorError::LockPoisoned)
    }

    /// Runs `action` against one session and returns a snapshot of the result.
    fn with_session<F>(&self, id: Uuid, action: F) -> Result<SimulatorSession, SimulatorError>
    where
        F: FnOnce(&mut SimulatorSession, &mut dyn RandomSource) -> Result<(), SimulatorError>,
    {
        let mut guard = self.lock()?;
        let state = &mut *guard;
        let session = state
            .sessions
            .get_mut(&id)
            .ok_or(SimulatorError::SessionNotFound(id))?;

        action(session, state.random.as_mut())?;
        session.touch();
        Ok(session.clone())
    }

    pub fn session_count(&self) -> Result<usize, SimulatorError> {
        Ok(self.lock()?.sessions.len())
    }

    pub fn create_session(&self) -> Result<SimulatorSession, SimulatorError> {
        let mut state = self.lock()?;
        if state.sessions.len() >= self.max_sessions {
            return Err(SimulatorError::SessionLimit(self.max_sessions));
        }

        let session = SimulatorSession::new();
        info!("Created simulator session {}", session.id);
        state.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    pub fn get_session(&self, id: Uuid) -> Result<SimulatorSession, SimulatorError> {
        self.lock()?
            .sessions
            .get(&id)
            .cloned()
            .ok_or(SimulatorError::SessionNotFound(id))
    }

    pub fn delete_session(&self, id: Uuid) -> Result<(), SimulatorError> {
        self.lock()?
            .sessions
            .remove(&id)
            .map(|_| info!("Deleted simulator session {}", id))
            .ok_or(SimulatorError::SessionNotFound(id))
    }

    /// Replaces the session wallet. An existing signature is left alone.
    pub fn generate_wallet(&self, id: Uuid) -> Result<SimulatorSession, SimulatorError> {
        self.with_session(id, |session, random| {
            let wallet = generate_key_pair_with(random);
            info!("Session {} generated wallet {}", id, wallet.address);
            session.wallet = Some(wallet);
            Ok(())
        })
    }

    pub fn update_document(&self, id: Uuid, document: String) -> Result<SimulatorSession, SimulatorError> {
        self.with_session(id, |session, _| {
            debug!("Session {} document updated ({} bytes)", id, document.len());
            session.document = document;
            session.hash = None;
            session.signature = None;
            Ok(())
        })
    }

    pub fn hash_document(&self, id: Uuid) -> Result<SimulatorSession, SimulatorError> {
        self.with_session(id, |session, _| {
            if session.document.trim().is_empty() {
                return Err(SimulatorError::EmptyDocument);
            }

            let hash = generate_hash(&session.document);
            info!("Session {} hashed document: {}", id, hash);
            session.hash = Some(hash);
            session.signature = None;
            Ok(())
        })
    }

    pub fn sign_document(&self, id: Uuid) -> Result<SimulatorSession, SimulatorError> {
        self.with_session(id, |session, _| {
            let wallet = session.wallet.as_ref().ok_or(SimulatorError::NoWallet)?;
            let hash = session.hash.as_ref().ok_or(SimulatorError::NoHash)?;

            let signature = sign_document(hash, &wallet.private_key);
            info!("Session {} signed document: {}", id, signature);
            session.signature = Some(signature);
            Ok(())
        })
    }

    pub fn update_verifier(
        &self,
        id: Uuid,
        update: UpdateVerifierRequest,
    ) -> Result<SimulatorSession, SimulatorError> {
        self.with_session(id, |session, _| {
            if let Some(document) = update.received_document {
                session.received_document = document;
            }
            if let Some(public_key) = update.received_public_key {
                session.received_public_key = public_key;
            }
            if let Some(signature) = update.received_signature {
                session.received_signature = signature;
            }
            session.verification = VerificationResult::Unknown;
            Ok(())
        })
    }

    /// Fills the verifier with what the signer panel produced, the way a user
    /// would paste it across.
    pub fn use_signed_document(&self, id: Uuid) -> Result<SimulatorSession, SimulatorError> {
        self.with_session(id, |session, _| {
            let signature = session.signature.clone().ok_or(SimulatorError::NoSignature)?;

            session.received_document = session.document.clone();
            session.received_public_key = session
                .wallet
                .as_ref()
                .map(|wallet| wallet.public_key.clone())
                .unwrap_or_default();
            session.received_signature = signature;
            session.verification = VerificationResult::Unknown;
            Ok(())
        })
    }

    /// Checks the verifier inputs. With a wallet in the session the signature
    /// is recomputed from its private key; without one only the signature
    /// shape can be checked.
    pub fn verify(&self, id: Uuid) -> Result<SimulatorSession, SimulatorError> {
        self.with_session(id, |session, _| {
            if session.received_document.trim().is_empty() {
                return Err(SimulatorError::MissingReceivedDocument);
            }
            if session.received_public_key.trim().is_empty() {
                return Err(SimulatorError::MissingPublicKey);
            }
            if session.received_signature.trim().is_empty() {
                return Err(SimulatorError::MissingSignature);
            }

            let valid = match &session.wallet {
                Some(wallet) => verify_signature(
                    &session.received_document,
                    &session.received_public_key,
                    &session.received_signature,
                    &wallet.private_key,
                ),
                None => {
                    debug!("Session {} has no wallet, checking signature format only", id);
                    check_signature_format(&session.received_signature)
                }
            };

            session.verification = VerificationResult::from(valid);
            info!("Session {} verification: {:?}", id, session.verification);
            Ok(())
        })
    }
}
