//! `WireGuard` key types.
//!
//! `WireGuard` uses Curve25519 for key exchange. Keys are 32 bytes and are
//! exchanged as standard base64 (44 characters with padding), which is the
//! form RouterOS expects in `private-key=` and `public-key=`.

use crate::error::{Result, WireGuardError};
use base64::Engine;
use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use subtle::ConstantTimeEq;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// `WireGuard` key size in bytes (256-bit Curve25519 keys).
pub const KEY_SIZE: usize = 32;

/// A `WireGuard` public key (Curve25519, 32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; KEY_SIZE]);

impl PublicKey {
    /// Creates a public key from raw bytes.
    #[must_use]
    pub const fn from_bytes_array(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a public key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| WireGuardError::InvalidKeyLength(bytes.len()))?;
        Ok(Self(arr))
    }

    /// Returns the raw bytes of the public key.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Encodes the key as base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.0)
    }

    /// Decodes a public key from base64.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid base64 or wrong length.
    pub fn from_base64(s: &str) -> Result<Self> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(s)?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b64 = self.to_base64();
        let short = &b64[..8.min(b64.len())];
        write!(f, "PublicKey({short}...)")
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

impl From<X25519PublicKey> for PublicKey {
    fn from(key: X25519PublicKey) -> Self {
        Self::from_bytes_array(*key.as_bytes())
    }
}

/// A `WireGuard` private key (Curve25519, 32 bytes), zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_SIZE]);

impl PrivateKey {
    /// Generates a new random private key from the OS CSPRNG.
    ///
    /// The scalar is clamped the same way `wg genkey` does it.
    ///
    /// # Errors
    ///
    /// Returns [`WireGuardError::Entropy`] if the OS random source fails.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| WireGuardError::Entropy(e.to_string()))?;

        bytes[0] &= 248;
        bytes[31] &= 127;
        bytes[31] |= 64;

        let key = Self(bytes);
        bytes.zeroize();
        Ok(key)
    }

    /// Creates a private key from a 32-byte array.
    #[must_use]
    pub const fn from_bytes_array(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a private key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| WireGuardError::InvalidKeyLength(bytes.len()))?;
        Ok(Self(arr))
    }

    /// Returns the raw bytes of the private key.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Derives the corresponding public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        let secret = StaticSecret::from(self.0);
        let public = X25519PublicKey::from(&secret);
        PublicKey::from(public)
    }

    /// Encodes the key as base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.0)
    }

    /// Decodes a private key from base64.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid base64 or wrong length.
    pub fn from_base64(s: &str) -> Result<Self> {
        let mut bytes = base64::engine::general_purpose::STANDARD.decode(s)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for PrivateKey {}

/// A `WireGuard` key pair (private + public).
#[derive(Clone)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a new random key pair.
    ///
    /// # Errors
    ///
    /// Returns [`WireGuardError::Entropy`] if the OS random source fails.
    pub fn generate() -> Result<Self> {
        Ok(Self::from_private_key(PrivateKey::generate()?))
    }

    /// Creates a key pair from an existing private key.
    #[must_use]
    pub fn from_private_key(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    /// Returns a reference to the private key.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Returns a reference to the public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}

/// Source of fresh key pairs, one call per peer.
pub trait KeySource {
    /// Produces a new key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if key material cannot be produced.
    fn generate_keypair(&self) -> Result<KeyPair>;
}

/// Key source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsKeySource;

impl KeySource for OsKeySource {
    fn generate_keypair(&self) -> Result<KeyPair> {
        KeyPair::generate()
    }
}

/// Generates a new `WireGuard` keypair from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`WireGuardError::Entropy`] if the OS random source fails.
pub fn generate_keypair() -> Result<KeyPair> {
    KeyPair::generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_key_generate_produces_valid_key() {
        let key = PrivateKey::generate().expect("entropy available");
        assert_eq!(key.as_bytes().len(), KEY_SIZE);
    }

    #[test]
    fn private_key_generate_is_clamped() {
        let key = PrivateKey::generate().expect("entropy available");
        let bytes = key.as_bytes();
        assert_eq!(bytes[0] & 7, 0);
        assert_eq!(bytes[31] & 128, 0);
        assert_eq!(bytes[31] & 64, 64);
    }

    #[test]
    fn private_key_to_public_key_is_deterministic() {
        let private = PrivateKey::generate().expect("entropy available");
        assert_eq!(private.public_key(), private.public_key());
    }

    #[test]
    fn two_keypairs_share_no_fields() {
        let first = generate_keypair().expect("entropy available");
        let second = generate_keypair().expect("entropy available");
        assert_ne!(first.public_key(), second.public_key());
        assert_ne!(first.private_key(), second.private_key());
    }

    #[test]
    fn public_key_base64_roundtrip() {
        let public = KeyPair::generate().expect("entropy available").public_key().to_owned();
        let encoded = public.to_base64();
        assert_eq!(encoded.len(), 44);
        let decoded = PublicKey::from_base64(&encoded).expect("decode failed");
        assert_eq!(public, decoded);
    }

    #[test]
    fn private_key_base64_roundtrip() {
        let private = PrivateKey::generate().expect("entropy available");
        let decoded = PrivateKey::from_base64(&private.to_base64()).expect("decode failed");
        assert_eq!(private, decoded);
    }

    #[test]
    fn known_vector_from_rfc7748() {
        // Alice's key pair from RFC 7748 section 6.1.
        let private = PrivateKey::from_bytes_array([
            0x77, 0x07, 0x6d, 0x0a, 0x73, 0x18, 0xa5, 0x7d, 0x3c, 0x16, 0xc1, 0x72, 0x51, 0xb2,
            0x66, 0x45, 0xdf, 0x4c, 0x2f, 0x87, 0xeb, 0xc0, 0x99, 0x2a, 0xb1, 0x77, 0xfb, 0xa5,
            0x1d, 0xb9, 0x2c, 0x2a,
        ]);
        let expected = PublicKey::from_bytes_array([
            0x85, 0x20, 0xf0, 0x09, 0x89, 0x30, 0xa7, 0x54, 0x74, 0x8b, 0x7d, 0xdc, 0xb4, 0x3e,
            0xf7, 0x5a, 0x0d, 0xbf, 0x3a, 0x0d, 0x26, 0x38, 0x1a, 0xf4, 0xeb, 0xa4, 0xa9, 0x8e,
            0xaa, 0x9b, 0x4e, 0x6a,
        ]);
        assert_eq!(private.public_key(), expected);
    }

    #[test]
    fn private_key_debug_redacts() {
        let private = PrivateKey::generate().expect("entropy available");
        let debug = format!("{private:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&private.to_base64()));
    }

    #[test]
    fn keypair_debug_redacts_private() {
        let keypair = KeyPair::generate().expect("entropy available");
        let debug = format!("{keypair:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&keypair.private_key().to_base64()));
    }

    #[test]
    fn public_key_serde_roundtrip() {
        let public = *KeyPair::generate().expect("entropy available").public_key();
        let json = serde_json::to_string(&public).expect("serialize failed");
        assert_eq!(json, format!("\"{}\"", public.to_base64()));
        let deserialized: PublicKey = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(public, deserialized);
    }

    #[test]
    fn keypair_from_private_key() {
        let private = PrivateKey::generate().expect("entropy available");
        let expected_public = private.public_key();
        let keypair = KeyPair::from_private_key(private);
        assert_eq!(keypair.public_key(), &expected_public);
    }

    #[test]
    fn os_key_source_produces_fresh_pairs() {
        let source = OsKeySource;
        let first = source.generate_keypair().expect("entropy available");
        let second = source.generate_keypair().expect("entropy available");
        assert_ne!(first.public_key(), second.public_key());
    }

    #[test]
    fn invalid_key_length_rejected() {
        let short_bytes = [0u8; 16];
        assert!(matches!(
            PrivateKey::from_bytes(&short_bytes),
            Err(WireGuardError::InvalidKeyLength(16))
        ));
        assert!(PublicKey::from_bytes(&short_bytes).is_err());
    }

    #[test]
    fn invalid_base64_rejected() {
        assert!(matches!(
            PublicKey::from_base64("not base64!"),
            Err(WireGuardError::InvalidBase64(_))
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn public_key_base64_roundtrip_prop(bytes in prop::array::uniform32(any::<u8>())) {
                let public = PublicKey::from_bytes_array(bytes);
                let decoded = PublicKey::from_base64(&public.to_base64());
                prop_assert_eq!(decoded.ok(), Some(public));
            }

            #[test]
            fn keypair_derivation_consistent(seed: [u8; 32]) {
                let private = PrivateKey::from_bytes_array(seed);
                prop_assert_eq!(private.public_key(), private.public_key());
            }
        }
    }
}
