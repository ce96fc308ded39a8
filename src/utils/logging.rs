//! Structured Logging with Sensitive Data Redaction
//!
//! Every QR code artifact carries material that must never reach a log
//! line verbatim. Fields are redacted by name:
//! - Private keys, mnemonics, passwords, ciphertexts and salts are hidden
//! - Chain ids, public keys and addresses keep a short prefix and suffix
//! - Transaction payloads are reduced to their length

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag to enable/disable debug logging
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable debug logging
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Structured log entry
#[derive(Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub module: &'static str,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn new(level: LogLevel, module: &'static str, message: impl Into<String>) -> Self {
        Self {
            level,
            module,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the log entry (auto-redacts sensitive data)
    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        let redacted = redact_field(key, &value.to_string());
        self.fields.push((key, redacted));
        self
    }

    /// Render the entry without emitting it
    pub fn render(&self) -> String {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let mut line = format!("[{}] {} [{}] {}", timestamp, self.level, self.module, self.message);

        if !self.fields.is_empty() {
            let fields = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(" | ");
            line.push_str(&fields);
        }
        line
    }

    /// Log the entry
    pub fn log(self) {
        if self.level == LogLevel::Debug && !is_debug_enabled() {
            return;
        }
        eprintln!("{}", self.render());
    }
}

const SECRET_KEYS: [&str; 9] = [
    "password",
    "passphrase",
    "private",
    "mnemonic",
    "seed",
    "secret",
    "ciphertext",
    "salt",
    "plain",
];

const IDENTITY_KEYS: [&str; 5] = ["chain_id", "generation_hash", "public_key", "publickey", "address"];

/// Redact a value according to what its key suggests it holds
fn redact_field(key: &str, value: &str) -> String {
    let key_lower = key.to_lowercase();

    if SECRET_KEYS.iter().any(|k| key_lower.contains(k)) {
        return redact_secret(value);
    }
    if IDENTITY_KEYS.iter().any(|k| key_lower.contains(k)) {
        return redact_identity(value);
    }
    if key_lower.contains("payload") {
        return format!("[{}chars]", value.len());
    }
    value.to_string()
}

/// Fully redact a sensitive value
fn redact_secret(value: &str) -> String {
    match value.len() {
        0 => "[EMPTY]".to_string(),
        1..=4 => "[REDACTED]".to_string(),
        len => format!("[REDACTED:{}chars]", len),
    }
}

/// Keep the first 6 and last 4 characters of an identifier
fn redact_identity(value: &str) -> String {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return "[EMPTY]".to_string();
    }
    if !trimmed.is_ascii() || trimmed.len() <= 13 {
        return trimmed.to_string();
    }
    format!("{}...{}", &trimmed[..6], &trimmed[trimmed.len() - 4..])
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:ident, $module:expr, $msg:expr) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::$level,
            $module,
            $msg
        ).log()
    };
    ($level:ident, $module:expr, $msg:expr, $($key:ident = $value:expr),* $(,)?) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::$level,
            $module,
            $msg
        )
        $(.field(stringify!($key), &$value))*
        .log()
    };
}

/// Convenience macro for debug logging
#[macro_export]
macro_rules! log_debug {
    ($($args:tt)*) => { $crate::__log_at!(Debug, $($args)*) };
}

/// Convenience macro for warning logging
#[macro_export]
macro_rules! log_warn {
    ($($args:tt)*) => { $crate::__log_at!(Warn, $($args)*) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_secret() {
        assert_eq!(redact_secret(""), "[EMPTY]");
        assert_eq!(redact_secret("abc"), "[REDACTED]");
        assert_eq!(redact_secret("secret_key_12345"), "[REDACTED:16chars]");
    }

    #[test]
    fn test_redact_identity() {
        let hash = "9F1979BEBA29C47E59B40393ABB516801A353CFC0C18BC241FEDE41939C907E7";
        assert_eq!(redact_identity(hash), "9F1979...07E7");
        assert_eq!(redact_identity("no-chain-id"), "no-chain-id");
        assert_eq!(redact_identity("  "), "[EMPTY]");
    }

    #[test]
    fn test_redact_field() {
        assert!(redact_field("private_key", "749F1FF1972CD465").contains("REDACTED"));
        assert!(redact_field("ciphertext", "56d310848ee93d07").contains("REDACTED"));
        assert!(redact_field("plainMnemonic", "stumble shoot").contains("REDACTED"));
        assert_eq!(redact_field("payload", "B000000000"), "[10chars]");
        assert_eq!(redact_field("qr_type", "ExportAccount(2)"), "ExportAccount(2)");
    }

    #[test]
    fn test_log_entry_fields() {
        let entry = LogEntry::new(LogLevel::Warn, "schema::account", "parse failed")
            .field("qr_type", 2)
            .field("password", "password");

        let password = entry.fields.iter().find(|(k, _)| *k == "password").unwrap();
        assert!(password.1.contains("REDACTED"));

        let line = entry.render();
        assert!(line.contains("WARN [schema::account] parse failed | qr_type=2"));
    }
}
