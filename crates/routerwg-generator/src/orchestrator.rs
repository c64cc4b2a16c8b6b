//! Submission handling.
//!
//! A submission moves through validation, key generation and synthesis.
//! Validation failures stop it before any key is generated, and no script
//! is ever returned alongside errors.

use routerwg_validation::ValidationError;
use routerwg_wireguard::{
    generate_config, KeySource, OsKeySource, Role, ScriptPolicy, TunnelParameters,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::GenerateError;
use crate::form::{FormField, FormInput, ValidatedForm};
use crate::settings::GeneratorSettings;

/// Result type for submission handling.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// The two scripts produced for one tunnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedConfigs {
    /// Script for the master router.
    pub master_config: String,
    /// Script for the client router.
    pub client_config: String,
}

/// One rejected field, as shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    /// Field identifier, such as `master_ip`.
    pub field: String,
    /// Human-readable label, when the field is a known form field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// What was wrong with the value.
    pub message: String,
}

impl From<&ValidationError> for FieldMessage {
    fn from(error: &ValidationError) -> Self {
        Self {
            field: error.field.clone(),
            label: FormField::from_id(&error.field).map(|f| f.label().to_string()),
            message: error.message(),
        }
    }
}

/// Serializable outcome of a submission, for hosts that answer in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmitResponse {
    /// Both scripts were produced.
    Generated(GeneratedConfigs),
    /// The form was rejected.
    Rejected {
        /// Every rejected field.
        errors: Vec<FieldMessage>,
    },
    /// Generation failed for a reason other than the form.
    Failed {
        /// Error description.
        error: String,
    },
}

impl SubmitResponse {
    /// Converts a submission result into a response body.
    #[must_use]
    pub fn from_result(result: Result<GeneratedConfigs>) -> Self {
        match result {
            Ok(configs) => Self::Generated(configs),
            Err(GenerateError::Validation(errors)) => Self::Rejected {
                errors: errors.iter().map(FieldMessage::from).collect(),
            },
            Err(other) => Self::Failed {
                error: other.to_string(),
            },
        }
    }

    /// Returns `true` if scripts were produced.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// Turns tunnel forms into RouterOS scripts.
///
/// The key source is a type parameter so tests can supply deterministic
/// keys or simulate an entropy failure.
#[derive(Debug, Clone)]
pub struct Generator<K = OsKeySource> {
    keys: K,
    policy: ScriptPolicy,
}

impl Generator<OsKeySource> {
    /// Creates a generator with OS keys and the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: OsKeySource,
            policy: ScriptPolicy::default(),
        }
    }

    /// Creates a generator with OS keys and the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Policy`] if the policy is out of range.
    pub fn with_policy(policy: ScriptPolicy) -> Result<Self> {
        Self::with_key_source(OsKeySource, policy)
    }

    /// Creates a generator using the script policy from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Policy`] if the policy is out of range.
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self> {
        Self::with_policy(settings.script.clone())
    }
}

impl Default for Generator<OsKeySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeySource> Generator<K> {
    /// Creates a generator with a custom key source.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Policy`] if the policy is out of range.
    pub fn with_key_source(keys: K, policy: ScriptPolicy) -> Result<Self> {
        policy.validate().map_err(GenerateError::Policy)?;
        Ok(Self { keys, policy })
    }

    /// The script policy in use.
    #[must_use]
    pub const fn policy(&self) -> &ScriptPolicy {
        &self.policy
    }

    /// Validates `form` and, if every field passes, generates both scripts.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Validation`] with every rejected field, or
    /// [`GenerateError::KeyGeneration`] if the key source fails.
    pub fn handle_submit(&self, form: &FormInput) -> Result<GeneratedConfigs> {
        debug!("validating submission");
        let validated = form.validate_with(&self.policy).map_err(|errors| {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            warn!(count = errors.len(), fields = ?fields, "submission rejected");
            GenerateError::Validation(errors)
        })?;

        self.generate(validated)
    }

    /// Generates keys and both scripts for an already validated form.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::KeyGeneration`] if the key source fails, or
    /// [`GenerateError::Parameters`] if the port or keepalive is zero.
    pub fn generate(&self, form: ValidatedForm) -> Result<GeneratedConfigs> {
        let params = TunnelParameters::new(form.listen_port, form.keepalive)
            .map_err(GenerateError::Parameters)?;

        debug!("generating key pairs");
        let master_keys = self
            .keys
            .generate_keypair()
            .map_err(GenerateError::KeyGeneration)?;
        let client_keys = self
            .keys
            .generate_keypair()
            .map_err(GenerateError::KeyGeneration)?;

        let master = form.master.into_peer(master_keys, Role::Initiator);
        let client = form.client.into_peer(client_keys, Role::Responder);

        debug!("synthesizing scripts");
        let configs = GeneratedConfigs {
            master_config: generate_config(&master, &client.counterpart(), &params, &self.policy),
            client_config: generate_config(&client, &master.counterpart(), &params, &self.policy),
        };

        info!(master = %master.name, client = %client.name, "tunnel configuration generated");
        Ok(configs)
    }
}

/// Handles a submission with OS keys and the default policy.
///
/// # Errors
///
/// See [`Generator::handle_submit`].
pub fn handle_submit(form: &FormInput) -> Result<GeneratedConfigs> {
    Generator::new().handle_submit(form)
}
