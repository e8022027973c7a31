use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{QuackError, QuackResult};

const DEFAULT_DUCK_CALL: &str = "Quack";
const DEFAULT_GOOSE_CALL: &str = "Honk";

/// Sound emitted by each kind of leaf.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct DuckCalls {
    #[validate(custom(function = "validate_call"))]
    pub mallard: String,
    #[validate(custom(function = "validate_call"))]
    pub redhead: String,
    #[validate(custom(function = "validate_call"))]
    pub goose: String,
}

impl Default for DuckCalls {
    fn default() -> Self {
        Self {
            mallard: DEFAULT_DUCK_CALL.to_string(),
            redhead: DEFAULT_DUCK_CALL.to_string(),
            goose: DEFAULT_GOOSE_CALL.to_string(),
        }
    }
}

impl DuckCalls {
    pub fn validated(self) -> QuackResult<Self> {
        self.validate()
            .map_err(|e| QuackError::InvalidConfiguration(e.to_string()))?;
        Ok(self)
    }
}

/// A call is audible when it has at least one non-blank character.
pub(crate) fn is_audible(call: &str) -> bool {
    !call.trim().is_empty()
}

fn validate_call(call: &str) -> Result<(), ValidationError> {
    if is_audible(call) {
        Ok(())
    } else {
        Err(ValidationError::new("inaudible"))
    }
}

#[cfg(test)]
mod tests {
    use crate::QuackError;

    use super::{is_audible, DuckCalls};

    #[test]
    fn test_default_calls_should_be_valid() {
        // When
        let result = DuckCalls::default().validated();

        // Then
        assert!(matches!(result, Ok(_)), "Should accept default calls");
    }

    #[test]
    fn test_validated_should_reject_empty_call() {
        // Given
        let calls = DuckCalls {
            goose: String::new(),
            ..Default::default()
        };

        // When
        let result = calls.validated();

        // Then
        assert!(
            matches!(result, Err(QuackError::InvalidConfiguration(message)) if message.contains("goose")),
            "Should name the invalid call"
        );
    }

    #[test]
    fn test_validated_should_reject_blank_duck_call() {
        // Given
        let calls = DuckCalls {
            redhead: " \t".to_string(),
            ..Default::default()
        };

        // When
        let result = calls.validated();

        // Then
        assert!(
            matches!(result, Err(QuackError::InvalidConfiguration(message)) if message.contains("redhead")),
            "Should apply the same rule as geese to duck calls"
        );
    }

    #[test]
    fn test_is_audible() {
        assert!(is_audible("Quack"));
        assert!(is_audible(" Honk "));
        assert!(!is_audible(""));
        assert!(!is_audible("   "));
    }
}
