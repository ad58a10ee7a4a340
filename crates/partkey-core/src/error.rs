use thiserror::Error;

/// Result type alias for participation key operations
pub type Result<T> = std::result::Result<T, PartkeyError>;

/// Errors that can occur while registering a participation key
#[derive(Error, Debug)]
pub enum PartkeyError {
    /// Authentication failed - invalid or missing API token
    #[error("authentication failed: invalid algod API token")]
    Unauthorized,

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// The node returned an error response
    #[error("algod error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the node
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transaction encoding failed
    #[error("transaction encoding failed: {0}")]
    Encode(String),

    /// Mnemonic has the wrong number of words
    #[error("mnemonic has {got} words, expected 25")]
    MnemonicWordCount {
        /// Number of words in the supplied phrase
        got: usize,
    },

    /// Mnemonic contains a word outside the wordlist
    #[error("unknown mnemonic word: {word:?}")]
    UnknownWord {
        /// The offending word
        word: String,
    },

    /// Mnemonic checksum word does not match the key
    #[error("mnemonic checksum mismatch")]
    ChecksumMismatch,

    /// Malformed address string
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Key material that should be base64 did not decode
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Validity window where the last round precedes the first
    #[error("invalid validity window: first round {first} > last round {last}")]
    InvalidValidityWindow {
        /// First valid round
        first: u64,
        /// Last valid round
        last: u64,
    },

    /// The node holds no participation key for the account
    #[error("no participation key found for address {address}")]
    NoMatchingKey {
        /// The account address that was searched for
        address: String,
    },

    /// The node rejected the submitted transaction
    #[error("transaction rejected by node: {message}")]
    Rejected {
        /// Pool error reported by the node
        message: String,
    },

    /// The transaction was not confirmed within the round budget
    #[error("transaction {txid} not confirmed within {rounds} rounds")]
    ConfirmationTimeout {
        /// Transaction ID that was being watched
        txid: String,
        /// Number of rounds waited
        rounds: u64,
    },

    /// The node did not finish generating a key in time
    #[error("participation key generation did not complete within {secs} seconds")]
    GenerationTimeout {
        /// Seconds waited before giving up
        secs: u64,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PartkeyError {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns true if the error means the mnemonic could not be parsed
    #[must_use]
    pub const fn is_mnemonic_error(&self) -> bool {
        matches!(
            self,
            Self::MnemonicWordCount { .. } | Self::UnknownWord { .. } | Self::ChecksumMismatch
        )
    }

    /// Returns the HTTP status code if this came from the node
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<rmp_serde::encode::Error> for PartkeyError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
