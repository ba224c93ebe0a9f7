use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ExtensionError {
    #[error("Unknown bootloader extension: {0:?}")]
    UnknownLoader(String),

    #[error("Invalid boot configuration: {0}")]
    InvalidConfig(String),
}

/// How bad a diagnostic is. The host refuses to use an extension that reported a [`Severity::Fatal`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Note,
    Info,
    Warn,
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Note => "note",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Fatal => "fatal",
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

impl Message {
    pub fn new<S: Into<String>>(severity: Severity, text: S) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn fatal<S: Into<String>>(text: S) -> Self {
        Self::new(Severity::Fatal, text)
    }

    pub fn warn<S: Into<String>>(text: S) -> Self {
        Self::new(Severity::Warn, text)
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.text)
    }
}

/// Answer to "can this bootloader be used here?", with whatever the extension had to say about it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub available: bool,
    pub messages: Vec<Message>,
}

impl Availability {
    #[must_use]
    pub const fn available() -> Self {
        Self {
            available: true,
            messages: vec![],
        }
    }

    #[must_use]
    pub fn unavailable(msg: Message) -> Self {
        Self {
            available: false,
            messages: vec![msg],
        }
    }

    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Fatal)
    }
}

#[enum_dispatch(Extension)]
pub trait BootExtension {
    /// Name the host uses to select this extension.
    fn name(&self) -> &'static str;
    fn is_available(&self) -> Availability;
}
