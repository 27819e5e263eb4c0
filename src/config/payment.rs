//! Payment configuration (Stripe)

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Stripe webhook signing secret
    pub stripe_webhook_secret: String,
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"));
        }
        if !self.stripe_webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_secret_fails_validation() {
        assert!(PaymentConfig::default().validate().is_err());
    }

    #[test]
    fn wrong_prefix_fails_validation() {
        let config = PaymentConfig {
            stripe_webhook_secret: "sk_test_xxx".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn whsec_prefix_passes_validation() {
        let config = PaymentConfig {
            stripe_webhook_secret: "whsec_xxx".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
