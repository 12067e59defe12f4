use regex::Regex;
use std::fmt;

/// Redacts keystore passwords from command lines and command output before
/// they reach logs or result messages.
#[derive(Clone)]
pub struct SecretScrubber {
    storepass_pattern: Regex,
    password_pattern: Regex,
}

impl SecretScrubber {
    pub fn new() -> Self {
        Self {
            // keytool -storepass / -keypass / -srcstorepass / -deststorepass, quoted or bare
            storepass_pattern: Regex::new(
                r#"(?i)(-(?:src|dest)?(?:store|key)pass\s+)('(?:[^']|'')*'|"[^"]*"|\S+)"#,
            )
            .expect("storepass pattern is valid"),
            // Match password fields
            password_pattern: Regex::new(r#"(?i)(["']?password["']?\s*[:=]\s*)["']?[^"'\s,}]+["']?"#)
                .expect("password pattern is valid"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = self
            .storepass_pattern
            .replace_all(message, "${1}[REDACTED]");
        self.password_pattern
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .to_string()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
