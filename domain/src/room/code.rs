//! Human-shareable room codes

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Characters used in generated codes
///
/// Uppercase letters and digits minus the lookalikes (0/O, 1/I/L) so a code
/// survives being read out loud or typed from a screenshot.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Length of a generated code
const CODE_LEN: usize = 6;

/// Short code participants use to join a room
///
/// # Example
///
/// ```
/// use swipematch_domain::room::RoomCode;
///
/// let code = RoomCode::generate();
/// assert_eq!(code.as_str().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Generate a fresh random code
    ///
    /// Uniqueness across rooms is enforced by the room-creation flow, not
    /// here; collisions are possible and must be retried by the caller.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..CODE_LEN)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
