//! Stable error codes, used for `rmbr explain` lookups.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: extraction errors
/// - E2xxx: default-resolution errors
/// - E3xxx: persistence errors
/// - E9xxx: input/output errors raised by the driver
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Extraction Errors (E1xxx)
    /// More than one default-policy marker on a parameter
    E1001,
    /// Ambient-scope parameter marked for persistence
    E1002,
    /// Class declares several different injectors
    E1003,

    // Resolution Errors (E2xxx)
    /// Injection requested with no injector and injection disabled
    E2001,
    /// Custom provider without a provider name
    E2002,

    // Persistence Errors (E3xxx)
    /// Saveable keys of parameters and properties differ
    E3001,
    /// Persisted parameter key has no matching property
    E3002,

    // Driver Errors (E9xxx)
    /// Declaration input could not be read
    E9001,
    /// Output could not be written
    E9002,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Error kind name, as it appears in messages and docs.
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "ConflictingDefaultPolicy",
            ErrorCode::E1002 => "InvalidAmbientScopeUsage",
            ErrorCode::E1003 => "ConflictingInjector",
            ErrorCode::E2001 => "UnresolvableDefault",
            ErrorCode::E2002 => "MissingProviderName",
            ErrorCode::E3001 => "SaveableKeyMismatch",
            ErrorCode::E3002 => "MissingSaveableProperty",
            ErrorCode::E9001 => "InputError",
            ErrorCode::E9002 => "WriteError",
        }
    }

    pub fn is_extraction_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    pub fn is_resolution_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }

    pub fn is_persistence_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002)
    }

    pub fn is_driver_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E3001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
