//! Constant metadata stamped onto every event and the document header.

use std::fmt;
use std::str::FromStr;

use crate::error::IcalError;

/// Line terminator used between content lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`, as RFC 5545 prescribes.
    Crlf,
}

impl LineEnding {
    /// The terminator characters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = IcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            _ => Err(IcalError::InvalidLineEnding { value: s.to_string() }),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
        })
    }
}

/// Document and event metadata that never varies between events.
///
/// Use the builder methods (`with_*`) to override the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStamp {
    prodid: String,
    dtstamp: String,
    organizer_name: String,
    organizer_email: String,
    uid_domain: String,
}

impl Default for EventStamp {
    fn default() -> Self {
        Self {
            prodid: "1-annum".into(),
            dtstamp: "20210101T170000Z".into(),
            organizer_name: "1-annum".into(),
            organizer_email: "contact@1-annum.com".into(),
            uid_domain: "1-annum.com".into(),
        }
    }
}

impl EventStamp {
    /// Set the `PRODID` of the document header.
    pub fn with_prodid(mut self, prodid: impl Into<String>) -> Self {
        self.prodid = prodid.into();
        self
    }

    /// Set the `DTSTAMP` (and `LAST-MODIFIED`) value, a UTC date-time such
    /// as `20210101T170000Z`.
    pub fn with_dtstamp(mut self, dtstamp: impl Into<String>) -> Self {
        self.dtstamp = dtstamp.into();
        self
    }

    /// Set the organizer common name.
    pub fn with_organizer_name(mut self, name: impl Into<String>) -> Self {
        self.organizer_name = name.into();
        self
    }

    /// Set the organizer e-mail address.
    pub fn with_organizer_email(mut self, email: impl Into<String>) -> Self {
        self.organizer_email = email.into();
        self
    }

    /// Set the domain appended to every UID.
    pub fn with_uid_domain(mut self, domain: impl Into<String>) -> Self {
        self.uid_domain = domain.into();
        self
    }

    /// Header product identifier.
    pub fn prodid(&self) -> &str {
        &self.prodid
    }

    /// Event creation stamp.
    pub fn dtstamp(&self) -> &str {
        &self.dtstamp
    }

    /// Organizer common name.
    pub fn organizer_name(&self) -> &str {
        &self.organizer_name
    }

    /// Organizer e-mail address.
    pub fn organizer_email(&self) -> &str {
        &self.organizer_email
    }

    /// UID domain.
    pub fn uid_domain(&self) -> &str {
        &self.uid_domain
    }
}
