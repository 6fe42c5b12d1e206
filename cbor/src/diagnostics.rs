use super::*;

/// A condition worth reporting that the writer does not treat as fatal, or
/// a structural failure it is about to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A container close failed; the same error is returned to the caller.
    CloseFailed(Error),

    /// The requested length cannot be tracked on this platform, so the
    /// container was opened with indefinite length instead.
    LengthDowngraded { kind: ContainerKind, requested: u64 },
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Diagnostic::CloseFailed(e) => write!(f, "CBOR container close failed: {e}"),
            Diagnostic::LengthDowngraded { kind, requested } => write!(
                f,
                "CBOR {kind} of {requested} entries is too large, writing indefinite length instead"
            ),
        }
    }
}

/// Receives diagnostics from a [`Writer`].
pub trait Diagnostics {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<D> Diagnostics for &D
where
    D: Diagnostics + ?Sized,
{
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        warn!("{diagnostic}");
    }
}
