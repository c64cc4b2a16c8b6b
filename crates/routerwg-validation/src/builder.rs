//! Validation builder for collecting every failure of a batch.

use crate::error::ValidationError;

/// Collects every validation failure of a batch.
///
/// # Example
///
/// ```
/// use routerwg_validation::{validate_ipv4, validate_subnet, ValidationBuilder};
///
/// let mut builder = ValidationBuilder::new();
/// let ip = builder.check(validate_ipv4("master_ip", "10.0.0.1"));
/// let lan = builder.check(validate_subnet("master_subnet", "192.168.1.0"));
///
/// assert!(ip.is_some());
/// assert!(lan.is_none());
/// assert_eq!(builder.into_errors()[0].field, "master_subnet");
/// ```
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: Vec<ValidationError>,
}

impl ValidationBuilder {
    /// Create a new validation builder.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record the outcome of a parsing validator.
    ///
    /// Returns the parsed value on success. On failure the error is kept
    /// and `None` is returned, so later checks still run.
    pub fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    /// Record a failure found outside a single-field validator.
    pub fn record(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if any errors have been collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the number of errors collected.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Consume and return all collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_ipv4, validate_port, validate_subnet};

    #[test]
    fn test_new_builder_is_empty() {
        let builder = ValidationBuilder::new();
        assert!(!builder.has_errors());
        assert_eq!(builder.error_count(), 0);
        assert!(builder.into_errors().is_empty());
    }

    #[test]
    fn test_check_returns_value_on_success() {
        let mut builder = ValidationBuilder::new();
        let ip = builder.check(validate_ipv4("ip", "10.0.0.1"));

        assert_eq!(ip.map(|ip| ip.octets()), Some([10, 0, 0, 1]));
        assert!(!builder.has_errors());
    }

    #[test]
    fn test_check_keeps_going_after_failure() {
        let mut builder = ValidationBuilder::new();
        let first = builder.check(validate_ipv4("master_ip", "999.1.1.1"));
        let second = builder.check(validate_subnet("client_subnet", "10.0.0.0"));
        let third = builder.check(validate_port("listen_port", "51820"));

        assert!(first.is_none());
        assert!(second.is_none());
        assert_eq!(third, Some(51820));
        assert_eq!(builder.error_count(), 2);

        let fields: Vec<_> = builder.into_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["master_ip", "client_subnet"]);
    }

    #[test]
    fn test_record_appends_after_checks() {
        let mut builder = ValidationBuilder::new();
        builder.check(validate_port("listen_port", "0"));
        builder.record(ValidationError::invalid_address(
            "client_ip",
            "10.0.0.1",
            "must differ from the master router address",
        ));

        let errors = builder.into_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].field, "client_ip");
        assert!(errors[1].is_address_error());
    }
}
