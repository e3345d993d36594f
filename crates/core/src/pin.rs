//! PIN-based admin session bootstrap.
//!
//! ```text
//! Anonymous --submit--> PendingVerification --match--> Authenticated
//!     ^          \                          \
//!     |           `--bad format--> Rejected  `--mismatch--> Rejected
//!     `----------------------------- reset ------------------'
//! ```
//!
//! The comparison against the configured secret is injected as a closure so
//! this module stays free of any hashing dependency.

use std::sync::LazyLock;

use regex::Regex;

/// Number of digits in an admin PIN.
pub const PIN_LENGTH: usize = 4;

static PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^[0-9]{{{PIN_LENGTH}}}$")).expect("valid regex"));

/// Why a PIN submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRejection {
    /// Not exactly four ASCII digits.
    InvalidFormat,
    /// Well-formed but does not match the configured PIN.
    Mismatch,
}

impl PinRejection {
    /// User-facing message for the rejection.
    pub fn message(self) -> &'static str {
        match self {
            PinRejection::InvalidFormat => "Invalid PIN format.",
            PinRejection::Mismatch => "Invalid PIN.",
        }
    }
}

/// Admin session state for a single login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    PendingVerification,
    Authenticated,
    Rejected(PinRejection),
}

impl SessionState {
    /// Submit a PIN from the `Anonymous` state.
    ///
    /// Malformed input is rejected immediately without consulting the
    /// secret. Any state other than `Anonymous` is returned unchanged.
    pub fn submit(self, pin: &str) -> SessionState {
        match self {
            SessionState::Anonymous if is_well_formed(pin) => SessionState::PendingVerification,
            SessionState::Anonymous => SessionState::Rejected(PinRejection::InvalidFormat),
            other => other,
        }
    }

    /// Resolve a pending verification with the result of the comparison.
    pub fn resolve(self, matched: bool) -> SessionState {
        match self {
            SessionState::PendingVerification if matched => SessionState::Authenticated,
            SessionState::PendingVerification => SessionState::Rejected(PinRejection::Mismatch),
            other => other,
        }
    }

    /// Return a rejected attempt to `Anonymous` so the next PIN can be tried.
    pub fn reset(self) -> SessionState {
        match self {
            SessionState::Rejected(_) => SessionState::Anonymous,
            other => other,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }
}

/// Whether `pin` is exactly [`PIN_LENGTH`] ASCII digits.
pub fn is_well_formed(pin: &str) -> bool {
    PIN_RE.is_match(pin)
}

/// Drive a full login attempt from `Anonymous` to a terminal state.
///
/// `verify` is only called for well-formed PINs. Errors from `verify` (e.g. a
/// corrupt stored hash) are propagated unchanged.
pub fn authenticate<E>(
    pin: &str,
    verify: impl FnOnce(&str) -> Result<bool, E>,
) -> Result<SessionState, E> {
    let state = SessionState::Anonymous.submit(pin);
    if state != SessionState::PendingVerification {
        return Ok(state);
    }
    let matched = verify(pin)?;
    Ok(state.resolve(matched))
}
