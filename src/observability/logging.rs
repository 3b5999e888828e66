//! Structured logging implementation for the site-generation client.
//!
//! Provides trait-based logging with structured field support.

use serde_json::Value;
use crate::config::LogLevel;

/// Logger trait for structured logging.
///
/// Implementations can integrate with various logging backends
/// (e.g., tracing, log, custom).
pub trait Logger: Send + Sync {
    /// Log a debug message with structured context.
    fn debug(&self, message: &str, fields: Value);

    /// Log an info message with structured context.
    fn info(&self, message: &str, fields: Value);

    /// Log a warning message with structured context.
    fn warn(&self, message: &str, fields: Value);

    /// Log an error message with structured context.
    fn error(&self, message: &str, fields: Value);
}

/// Structured logger implementation using the tracing crate.
pub struct StructuredLogger {
    name: String,
    level: LogLevel,
}

impl StructuredLogger {
    /// Create a new structured logger with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: LogLevel::Info,
        }
    }

    /// Set the minimum log level for this logger.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level_value(level) <= level_value(self.level)
    }

    /// Redact sensitive fields from log data.
    ///
    /// Prompts and documents routinely carry user content; credentials must
    /// never reach the log stream even if a caller passes them through.
    fn redact_sensitive_fields(&self, mut fields: Value) -> Value {
        if let Some(obj) = fields.as_object_mut() {
            let sensitive_keys = [
                "api_key", "apiKey", "key",
                "token", "access_token", "accessToken",
                "secret", "password", "credential",
                "authorization", "auth",
            ];

            for key in &sensitive_keys {
                if obj.contains_key(*key) {
                    obj.insert(key.to_string(), Value::String("***REDACTED***".to_string()));
                }
            }

            for (_, value) in obj.iter_mut() {
                if value.is_object() {
                    *value = self.redact_sensitive_fields(value.clone());
                }
            }
        }

        fields
    }
}

fn level_value(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
        LogLevel::Trace => 4,
    }
}

impl Logger for StructuredLogger {
    fn debug(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Debug) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::debug!(
            target: "sitegen_client",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }

    fn info(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Info) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::info!(
            target: "sitegen_client",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }

    fn warn(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Warn) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::warn!(
            target: "sitegen_client",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }

    fn error(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Error) {
            return;
        }

        let redacted_fields = self.redact_sensitive_fields(fields);
        tracing::error!(
            target: "sitegen_client",
            logger = %self.name,
            message = message,
            fields = %redacted_fields,
        );
    }
}

/// Default logger implementation (no-op).
///
/// Suitable for tests or for callers that disable logging entirely.
pub struct DefaultLogger {
    _prefix: String,
}

impl DefaultLogger {
    /// Creates a new default logger.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            _prefix: prefix.into(),
        }
    }
}

impl Logger for DefaultLogger {
    fn debug(&self, _message: &str, _fields: Value) {}
    fn info(&self, _message: &str, _fields: Value) {}
    fn warn(&self, _message: &str, _fields: Value) {}
    fn error(&self, _message: &str, _fields: Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("test");
        assert_eq!(logger.name, "test");
    }

    #[test]
    fn test_should_log() {
        let logger = StructuredLogger::new("test").with_level(LogLevel::Info);
        assert!(logger.should_log(LogLevel::Error));
        assert!(logger.should_log(LogLevel::Warn));
        assert!(logger.should_log(LogLevel::Info));
        assert!(!logger.should_log(LogLevel::Debug));
        assert!(!logger.should_log(LogLevel::Trace));
    }

    #[test]
    fn test_redact_sensitive_fields() {
        let logger = StructuredLogger::new("test");

        let fields = json!({
            "api_key": "secret-key-123",
            "prompt": "build a landing page",
            "user": "test-user"
        });

        let redacted = logger.redact_sensitive_fields(fields);

        assert_eq!(redacted["api_key"], "***REDACTED***");
        assert_eq!(redacted["prompt"], "build a landing page");
        assert_eq!(redacted["user"], "test-user");
    }

    #[test]
    fn test_redact_nested_sensitive_fields() {
        let logger = StructuredLogger::new("test");

        let fields = json!({
            "request": {
                "authorization": "Bearer token-123",
                "prompt": "build a blog"
            },
            "user": "test-user"
        });

        let redacted = logger.redact_sensitive_fields(fields);

        assert_eq!(redacted["request"]["authorization"], "***REDACTED***");
        assert_eq!(redacted["request"]["prompt"], "build a blog");
    }

    #[test]
    fn test_default_logger_is_silent() {
        let logger = DefaultLogger::new("test");
        logger.debug("x", json!({}));
        logger.info("x", json!({}));
        logger.warn("x", json!({}));
        logger.error("x", json!({}));
    }
}
