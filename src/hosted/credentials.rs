//! Validated hotspot credentials.

use std::fmt;

use thiserror::Error;

/// Minimum SSID length accepted.
pub const SSID_MIN_LEN: usize = 3;

/// Maximum SSID length in bytes (802.11 limit).
pub const SSID_MAX_LEN: usize = 32;

/// Minimum pre-shared key length (WPA2-Personal).
pub const KEY_MIN_LEN: usize = 8;

/// Maximum pre-shared key length (WPA2-Personal passphrase).
pub const KEY_MAX_LEN: usize = 63;

/// Why a credential was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("SSID must be at least {limit} characters (got {0})", limit = SSID_MIN_LEN)]
    SsidTooShort(usize),

    #[error("SSID must be at most {limit} bytes (got {0})", limit = SSID_MAX_LEN)]
    SsidTooLong(usize),

    #[error("Key must be at least {limit} characters (got {0})", limit = KEY_MIN_LEN)]
    KeyTooShort(usize),

    #[error("Key must be at most {limit} characters (got {0})", limit = KEY_MAX_LEN)]
    KeyTooLong(usize),

    /// Double quotes cannot be passed through to the wireless service.
    #[error("{0} must not contain double quotes")]
    ForbiddenQuote(&'static str),
}

/// SSID and pre-shared key for one `start` invocation.
///
/// Can only be built through [`HotspotConfig::new`], so holding one means the
/// lengths were checked. Never written to disk by this crate.
#[derive(Clone, PartialEq, Eq)]
pub struct HotspotConfig {
    ssid: String,
    key: String,
}

impl HotspotConfig {
    /// Validates and wraps the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if the SSID is shorter than 3 characters
    /// or longer than 32 bytes, the key is not 8-63 characters, or either
    /// contains a double quote.
    pub fn new(ssid: impl Into<String>, key: impl Into<String>) -> Result<Self, CredentialError> {
        let ssid = ssid.into();
        let key = key.into();

        validate_ssid(&ssid)?;

        let key_len = key.chars().count();
        if key_len < KEY_MIN_LEN {
            return Err(CredentialError::KeyTooShort(key_len));
        }
        if key_len > KEY_MAX_LEN {
            return Err(CredentialError::KeyTooLong(key_len));
        }
        if key.contains('"') {
            return Err(CredentialError::ForbiddenQuote("Key"));
        }

        Ok(Self { ssid, key })
    }

    /// The network name.
    #[must_use]
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// The pre-shared key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Checks an SSID on its own, so it can be rejected before the key is asked for.
///
/// The minimum counts characters; the maximum counts UTF-8 bytes.
///
/// # Errors
///
/// Returns [`CredentialError`] if the SSID length or characters are invalid.
pub fn validate_ssid(ssid: &str) -> Result<(), CredentialError> {
    let chars = ssid.chars().count();
    if chars < SSID_MIN_LEN {
        return Err(CredentialError::SsidTooShort(chars));
    }
    if ssid.len() > SSID_MAX_LEN {
        return Err(CredentialError::SsidTooLong(ssid.len()));
    }
    if ssid.contains('"') {
        return Err(CredentialError::ForbiddenQuote("SSID"));
    }
    Ok(())
}

impl fmt::Debug for HotspotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotspotConfig")
            .field("ssid", &self.ssid)
            .field("key", &"****")
            .finish()
    }
}
