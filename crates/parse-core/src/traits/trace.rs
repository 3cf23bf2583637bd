//! Diagnostic trace sink.

/// Receives a copy of every request and response body the client handles.
///
/// Purely observational: a sink can neither fail a call nor change its
/// result. Closures taking `(operation, path, payload)` implement it.
pub trait TraceSink: Send + Sync {
    /// Record one `(operation, path, payload)` triple.
    fn trace(&self, operation: &str, path: &str, payload: &str);
}

impl<F> TraceSink for F
where
    F: Fn(&str, &str, &str) + Send + Sync,
{
    fn trace(&self, operation: &str, path: &str, payload: &str) {
        self(operation, path, payload)
    }
}
