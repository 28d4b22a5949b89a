//! Core diagnostic types.
//!
//! Generator errors point at declarations, not source spans: a [`Location`]
//! names the class and optionally one member (parameter, property or saveable
//! key) inside it.

use std::fmt;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// A member of a class that a diagnostic can point at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Member {
    Param(String),
    Property(String),
    Key(String),
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Param(name) => write!(f, "parameter `{name}`"),
            Member::Property(name) => write!(f, "property `{name}`"),
            Member::Key(key) => write!(f, "saveable key \"{key}\""),
        }
    }
}

/// Where a diagnostic applies: a class, or a member of it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    /// Qualified class name, or an input path for driver errors.
    pub subject: String,
    pub member: Option<Member>,
}

impl Location {
    pub fn class(subject: impl Into<String>) -> Self {
        Location {
            subject: subject.into(),
            member: None,
        }
    }

    pub fn param(subject: impl Into<String>, name: impl Into<String>) -> Self {
        Location {
            subject: subject.into(),
            member: Some(Member::Param(name.into())),
        }
    }

    pub fn property(subject: impl Into<String>, name: impl Into<String>) -> Self {
        Location {
            subject: subject.into(),
            member: Some(Member::Property(name.into())),
        }
    }

    pub fn key(subject: impl Into<String>, key: impl Into<String>) -> Self {
        Location {
            subject: subject.into(),
            member: Some(Member::Key(key.into())),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}, {member}", self.subject),
            None => f.write_str(&self.subject),
        }
    }
}

/// A labeled location with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub location: Location,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A rendered error with everything the emitters need.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Human-readable fixes.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(location, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(location, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The first primary label, if any.
    pub fn primary_location(&self) -> Option<&Location> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .map(|l| &l.location)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests;
