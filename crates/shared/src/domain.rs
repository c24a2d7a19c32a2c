use std::{fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationFailure;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

/// `local@domain.tld` shape: one `@`, no whitespace, a dot with text on both
/// sides somewhere after the `@`. U+FEFF counts as whitespace.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(SubmissionId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// A contact message that passed validation. Only constructible through
/// [`ContactMessage::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let (name, email, message) = (name.into(), email.into(), message.into());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationFailure::MissingField);
        }
        if !is_valid_email(&email) {
            return Err(ValidationFailure::BadEmailFormat);
        }
        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acknowledgement {
    /// The relay accepted the notification.
    Relayed,
    /// Only the submission log saw the message.
    Recorded,
}

impl Acknowledgement {
    pub fn message(self) -> &'static str {
        match self {
            Self::Relayed => "Message sent successfully",
            Self::Recorded => "Message received (email service not configured)",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SequenceStep {
    #[default]
    Blank,
    Title,
    Tagline,
    ScrollHint,
    Finale,
}

impl SequenceStep {
    pub const ALL: [SequenceStep; 5] = [
        Self::Blank,
        Self::Title,
        Self::Tagline,
        Self::ScrollHint,
        Self::Finale,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            Self::Blank => 0,
            Self::Title => 1,
            Self::Tagline => 2,
            Self::ScrollHint => 3,
            Self::Finale => 4,
        }
    }

    pub fn shows_title(self) -> bool {
        self >= Self::Title
    }

    pub fn shows_tagline(self) -> bool {
        self >= Self::Tagline
    }

    pub fn shows_scroll_hint(self) -> bool {
        self >= Self::ScrollHint
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Intro,
    Inquiry,
    Inquire,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Intro, Self::Inquiry, Self::Inquire];

    pub fn index(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Inquiry => 1,
            Self::Inquire => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(2);
