use aide_core_types::RequestId;
use thiserror::Error;

/// Result type alias using AssistantError
pub type Result<T> = std::result::Result<T, AssistantError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in structured logs and by
/// tests that need to tell failure categories apart without matching on
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Routing
    UnrecognizedCommand,
    MissingArgument,

    // Process launching
    SpawnFailed,

    // Filesystem
    Io,

    // Platform
    PlatformUnavailable,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnrecognizedCommand => "ERR_UNRECOGNIZED_COMMAND",
            ExErrorKind::MissingArgument => "ERR_MISSING_ARGUMENT",
            ExErrorKind::SpawnFailed => "ERR_SPAWN_FAILED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::PlatformUnavailable => "ERR_PLATFORM_UNAVAILABLE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification of an `AssistantError` plus correlation
/// context, for structured logging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failures a handler can report
///
/// The `Display` text of each variant is exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssistantError {
    /// The OS refused to open the URL
    #[error("Error opening browser: {reason}")]
    BrowserLaunch { url: String, reason: String },

    /// A desktop application could not be spawned
    #[error("Error opening {app}: {reason}")]
    ApplicationLaunch { app: String, reason: String },

    /// Directory could not be read
    #[error("Error listing files: {reason}")]
    ListFiles { directory: String, reason: String },

    /// File could not be written
    #[error("Error creating file: {reason}")]
    CreateFile { filename: String, reason: String },

    /// A handler that needs an argument was invoked without it
    #[error("Error {action}: missing {argument}")]
    MissingArgument {
        action: &'static str,
        argument: &'static str,
    },

    /// Platform details could not be determined
    #[error("Error getting system info: {reason}")]
    SystemInfo { reason: String },

    /// Nothing in the command table matched the input
    #[error("Command not recognized. Type 'help' for available commands.")]
    UnrecognizedCommand { input: String },
}

impl AssistantError {
    /// Classify this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            AssistantError::BrowserLaunch { .. } | AssistantError::ApplicationLaunch { .. } => {
                ExErrorKind::SpawnFailed
            }
            AssistantError::ListFiles { .. } | AssistantError::CreateFile { .. } => {
                ExErrorKind::Io
            }
            AssistantError::MissingArgument { .. } => ExErrorKind::MissingArgument,
            AssistantError::SystemInfo { .. } => ExErrorKind::PlatformUnavailable,
            AssistantError::UnrecognizedCommand { .. } => ExErrorKind::UnrecognizedCommand,
        }
    }
}

impl From<AssistantError> for ExError {
    fn from(err: AssistantError) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}

impl From<&AssistantError> for ExError {
    fn from(err: &AssistantError) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}
