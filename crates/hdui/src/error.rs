#![forbid(unsafe_code)]

//! HDUI error model and graceful degradation.
//!
//! Every subsystem reports a typed error. The unified [`Error`] wraps them and
//! maps each to a [`DegradationAction`] so a feed screen stays on screen:
//! a bad list configuration renders an empty list, a config file that fails
//! to load falls back to defaults, a zero-sized area skips the frame.

use std::fmt;

pub use hdui_widgets::config::ConfigError;
pub use hdui_widgets::window::WindowError;

// ── Domain-Specific Error Types ─────────────────────────────────────────

/// Render surface errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The area handed to a widget has no cells.
    EmptyArea { width: u16, height: u16 },
}

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type for HDUI hosts.
///
/// Use [`Error::degradation`] to determine the recovery action.
#[derive(Debug)]
pub enum Error {
    /// Item or container height rejected by the window computation.
    Window(WindowError),
    /// List configuration failed to load or validate.
    Config(ConfigError),
    /// Render surface failure.
    Render(RenderError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for HDUI APIs.
pub type Result<T> = std::result::Result<T, Error>;

// ── Graceful Degradation ────────────────────────────────────────────────

/// What the host should do when an error occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradationAction {
    /// Leave the list area empty until the configuration is fixed.
    RenderNothing,
    /// Continue with [`ListConfig::default`](hdui_widgets::config::ListConfig).
    UseDefaults,
    /// Skip the current frame entirely.
    SkipFrame,
    /// The error is unrecoverable; shut down gracefully.
    Shutdown,
}

impl Error {
    /// Determine the graceful degradation action for this error.
    #[must_use]
    pub fn degradation(&self) -> DegradationAction {
        match self {
            Self::Window(_) => DegradationAction::RenderNothing,
            Self::Config(_) => DegradationAction::UseDefaults,
            Self::Render(RenderError::EmptyArea { .. }) => DegradationAction::SkipFrame,
            Self::Io(_) => DegradationAction::Shutdown,
        }
    }

    /// Error type label for metrics and tracing.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Window(_) => "window",
            Self::Config(_) => "config",
            Self::Render(_) => "render",
            Self::Io(_) => "io",
        }
    }

    /// Whether the error is recoverable (does not require shutdown).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.degradation(), DegradationAction::Shutdown)
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArea { width, height } => write!(f, "empty render area: {width}x{height}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(err) => write!(f, "window: {err}"),
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Render(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl fmt::Display for DegradationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenderNothing => write!(f, "render_nothing"),
            Self::UseDefaults => write!(f, "use_defaults"),
            Self::SkipFrame => write!(f, "skip_frame"),
            Self::Shutdown => write!(f, "shutdown"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for RenderError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Window(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<WindowError> for Error {
    fn from(err: WindowError) -> Self {
        Self::Window(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
