pub mod error;
pub mod key;
pub mod message;
pub mod session;
pub mod verification;

pub use error::{ApiError, ErrorResponse};
pub use key::{KeyPair, WalletDisplay};
pub use message::Message;
pub use session::{SessionQuery, SessionView, SimulatorSession, UpdateDocumentRequest, UpdateVerifierRequest};
pub use verification::VerificationResult;
