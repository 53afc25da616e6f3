//! Syntactically validated email addresses.

/// Reasons an email address can be rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address cannot be empty")]
    Empty,
    #[error("email address must contain a single '@'")]
    MissingAt,
    #[error("email local part is invalid")]
    InvalidLocalPart,
    #[error("email domain is invalid")]
    InvalidDomain,
}

/// An email address that has passed syntax validation.
///
/// The check is syntactic only: one `@`, a dot-atom local part of at most 64 bytes and a
/// domain of at least two DNS labels with a non-numeric top-level label. No DNS lookup is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LOCAL_LEN: usize = 64;
    const MAX_DOMAIN_LEN: usize = 253;
    const MAX_LABEL_LEN: usize = 63;

    /// Parses and validates an email address.
    ///
    /// Surrounding whitespace is trimmed and the domain is lowercased. The local part keeps its
    /// case.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] describing the first rule the input breaks.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, EmailError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        let (local, domain) = trimmed.split_once('@').ok_or(EmailError::MissingAt)?;
        if domain.contains('@') {
            return Err(EmailError::MissingAt);
        }

        if !Self::valid_local_part(local) {
            return Err(EmailError::InvalidLocalPart);
        }
        if !Self::valid_domain(domain) {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self(format!("{}@{}", local, domain.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn valid_local_part(local: &str) -> bool {
        if local.is_empty() || local.len() > Self::MAX_LOCAL_LEN {
            return false;
        }
        if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return false;
        }
        local.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'.' | b'!'
                        | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'/'
                        | b'='
                        | b'?'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'{'
                        | b'|'
                        | b'}'
                        | b'~'
                        | b'-'
                )
        })
    }

    fn valid_domain(domain: &str) -> bool {
        if domain.is_empty() || domain.len() > Self::MAX_DOMAIN_LEN {
            return false;
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return false;
        }

        let labels_ok = labels.iter().all(|label| {
            !label.is_empty()
                && label.len() <= Self::MAX_LABEL_LEN
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        });

        let tld_ok = labels
            .last()
            .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()));

        labels_ok && tld_ok
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_addresses() {
        for input in [
            "a@x.com",
            "nnavaskar@gmail.com",
            "first.last+tag@sub.example.co.uk",
            "o'brien@hospital-trust.nhs.uk",
        ] {
            let email = EmailAddress::parse(input).unwrap();
            assert_eq!(email.as_str(), input);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let email = EmailAddress::parse("  a@x.com ").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_parse_lowercases_domain_only() {
        let email = EmailAddress::parse("First.Last@Example.COM").unwrap();
        assert_eq!(email.as_str(), "First.Last@example.com");
    }

    #[test]
    fn test_parse_rejects_missing_or_repeated_at() {
        assert_eq!(EmailAddress::parse("ax.com"), Err(EmailError::MissingAt));
        assert_eq!(EmailAddress::parse("a@b@x.com"), Err(EmailError::MissingAt));
    }

    #[test]
    fn test_parse_rejects_bad_local_part() {
        assert_eq!(
            EmailAddress::parse("@x.com"),
            Err(EmailError::InvalidLocalPart)
        );
        assert_eq!(
            EmailAddress::parse("a..b@x.com"),
            Err(EmailError::InvalidLocalPart)
        );
        assert_eq!(
            EmailAddress::parse("a b@x.com"),
            Err(EmailError::InvalidLocalPart)
        );
        let long_local = format!("{}@x.com", "a".repeat(65));
        assert_eq!(
            EmailAddress::parse(long_local),
            Err(EmailError::InvalidLocalPart)
        );
    }

    #[test]
    fn test_parse_rejects_bad_domain() {
        for input in ["a@localhost", "a@x..com", "a@-x.com", "a@x.123", "a@x_y.com", "a@"] {
            assert_eq!(
                EmailAddress::parse(input),
                Err(EmailError::InvalidDomain),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(EmailAddress::parse("   "), Err(EmailError::Empty));
    }

    #[test]
    fn test_deserialize_rejects_invalid_address() {
        let err = serde_json::from_str::<EmailAddress>("\"not-an-email\"").unwrap_err();
        assert!(err.to_string().contains("single '@'"));
    }
}
