//! Patient age in whole years.

/// Errors that can occur when creating a [`PatientAge`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AgeError {
    #[error("age must be greater than {min}, got {value}", min = PatientAge::EXCLUSIVE_MIN)]
    TooLow { value: i64 },
    #[error("age must be less than {max}, got {value}", max = PatientAge::EXCLUSIVE_MAX)]
    TooHigh { value: i64 },
}

/// An age strictly between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientAge(u8);

impl PatientAge {
    pub const EXCLUSIVE_MIN: i64 = 0;
    pub const EXCLUSIVE_MAX: i64 = 100;

    /// Creates a new `PatientAge`.
    ///
    /// # Errors
    ///
    /// Returns [`AgeError`] if `value` is not strictly between 0 and 100.
    pub fn new(value: i64) -> Result<Self, AgeError> {
        if value <= Self::EXCLUSIVE_MIN {
            return Err(AgeError::TooLow { value });
        }
        if value >= Self::EXCLUSIVE_MAX {
            return Err(AgeError::TooHigh { value });
        }
        // Bounds above guarantee 1..=99.
        Ok(Self(value as u8))
    }

    pub fn get(self) -> i64 {
        i64::from(self.0)
    }
}

impl std::fmt::Display for PatientAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PatientAge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|e| format!("age must be an integer: {e}"))?;
        Self::new(value).map_err(|e| e.to_string())
    }
}

impl serde::Serialize for PatientAge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.get())
    }
}

impl<'de> serde::Deserialize<'de> for PatientAge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        PatientAge::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_exclusive() {
        assert_eq!(PatientAge::new(0), Err(AgeError::TooLow { value: 0 }));
        assert_eq!(PatientAge::new(100), Err(AgeError::TooHigh { value: 100 }));
        assert_eq!(PatientAge::new(1).unwrap().get(), 1);
        assert_eq!(PatientAge::new(99).unwrap().get(), 99);
    }

    #[test]
    fn test_negative_and_large_values_rejected() {
        assert!(PatientAge::new(-5).is_err());
        assert!(PatientAge::new(150).is_err());
        assert!(PatientAge::new(i64::MAX).is_err());
    }

    #[test]
    fn test_error_message_names_the_bound() {
        let err = PatientAge::new(150).unwrap_err();
        assert_eq!(err.to_string(), "age must be less than 100, got 150");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("30".parse::<PatientAge>().unwrap().get(), 30);
        assert!("thirty".parse::<PatientAge>().is_err());
        assert!("0".parse::<PatientAge>().is_err());
    }

    #[test]
    fn test_serde_uses_plain_integer() {
        let age: PatientAge = serde_json::from_str("42").unwrap();
        assert_eq!(serde_json::to_string(&age).unwrap(), "42");
        assert!(serde_json::from_str::<PatientAge>("150").is_err());
    }
}
