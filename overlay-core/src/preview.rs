//! Best-effort existence check before opening a document preview.

/// Result of probing a preview URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a success status.
    Found,
    /// The server answered with an error status.
    NotFound,
    /// The request could not be made or was rejected.
    Failed,
    TimedOut,
}

impl ProbeOutcome {
    /// Classify an HTTP status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status >= 200 && status < 300 {
            Self::Found
        } else {
            Self::NotFound
        }
    }
}

/// What to do with a preview trigger once the probe settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewDecision {
    /// Show the document inside the preview overlay.
    Open,
    /// Hand the URL to the browser in a new browsing context.
    NavigateExternal,
}

impl PreviewDecision {
    /// A missing resource goes to the browser; an inconclusive probe still opens.
    #[must_use]
    pub const fn from_probe(outcome: ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::NotFound => Self::NavigateExternal,
            ProbeOutcome::Found | ProbeOutcome::Failed | ProbeOutcome::TimedOut => Self::Open,
        }
    }
}
