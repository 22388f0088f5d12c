use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerificationResult {
    Valid,
    Invalid,
    /// Verification has not been run since the inputs last changed.
    #[default]
    Unknown,
}

impl From<bool> for VerificationResult {
    fn from(valid: bool) -> Self {
        if valid {
            VerificationResult::Valid
        } else {
            VerificationResult::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&VerificationResult::Valid).unwrap(), "\"valid\"");
        assert_eq!(serde_json::to_string(&VerificationResult::Invalid).unwrap(), "\"invalid\"");
        assert_eq!(serde_json::to_string(&VerificationResult::Unknown).unwrap(), "\"unknown\"");
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(VerificationResult::from(true), VerificationResult::Valid);
        assert_eq!(VerificationResult::from(false), VerificationResult::Invalid);
        assert_eq!(VerificationResult::default(), VerificationResult::Unknown);
    }
}
