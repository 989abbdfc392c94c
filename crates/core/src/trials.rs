//! Trial count input
//!
//! The requested number of needles arrives as free text. Anything that is
//! not a positive integer falls back to a default instead of aborting.

use crate::error::ParseTrialsError;
use tracing::warn;

/// Parse a positive trial count, ignoring surrounding whitespace
pub fn parse_trials(input: &str) -> Result<u64, ParseTrialsError> {
    let trimmed = input.trim();
    let n: i128 = trimmed
        .parse()
        .map_err(|_| ParseTrialsError::NotANumber(trimmed.to_string()))?;
    if n <= 0 {
        return Err(ParseTrialsError::NotPositive(n));
    }
    u64::try_from(n).map_err(|_| ParseTrialsError::NotANumber(trimmed.to_string()))
}

/// A resolved trial count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialCount {
    /// The input was usable as given
    Requested(u64),
    /// The input was rejected and the default substituted
    Fallback { trials: u64, reason: ParseTrialsError },
}

impl TrialCount {
    pub fn get(&self) -> u64 {
        match self {
            TrialCount::Requested(n) => *n,
            TrialCount::Fallback { trials, .. } => *trials,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TrialCount::Fallback { .. })
    }
}

/// Parse `input`, substituting `default` when it is not a positive integer
pub fn resolve_trials(input: &str, default: u64) -> TrialCount {
    match parse_trials(input) {
        Ok(n) => TrialCount::Requested(n),
        Err(reason) => {
            warn!(%reason, default, "invalid trial count, using default");
            TrialCount::Fallback {
                trials: default,
                reason,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TRIALS;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_trials("10000"), Ok(10000));
        assert_eq!(parse_trials("  42\n"), Ok(42));
        assert_eq!(parse_trials("+7"), Ok(7));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(
            parse_trials("lots"),
            Err(ParseTrialsError::NotANumber("lots".to_string()))
        );
        assert!(parse_trials("").is_err());
        assert!(parse_trials("3.5").is_err());
        assert!(parse_trials("99999999999999999999999999").is_err());
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(parse_trials("0"), Err(ParseTrialsError::NotPositive(0)));
        assert_eq!(parse_trials("-5"), Err(ParseTrialsError::NotPositive(-5)));
    }

    #[test]
    fn test_non_numeric_input_falls_back_to_default() {
        let count = resolve_trials("abc", DEFAULT_TRIALS);
        assert!(count.is_fallback());
        assert_eq!(count.get(), 300);
    }

    #[test]
    fn test_valid_input_is_kept() {
        let count = resolve_trials("1234", DEFAULT_TRIALS);
        assert_eq!(count, TrialCount::Requested(1234));
        assert_eq!(count.get(), 1234);
    }
}
