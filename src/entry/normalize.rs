//! Canonicalization of operator input.
//!
//! Lower-cases listener protocols and fills in the default protocol.
//! Unknown protocols are left for validation to reject.

use crate::entry::protocol::DEFAULT_PROTOCOL;
use crate::entry::schema::ConfigEntry;
use crate::error::NormalizeError;

/// Canonicalize `entry` in place. Running it twice is a no-op.
pub fn normalize(entry: &mut ConfigEntry) -> Result<(), NormalizeError> {
    for listener in &mut entry.listeners {
        let canonical = if listener.protocol.is_empty() {
            DEFAULT_PROTOCOL.to_string()
        } else {
            listener.protocol.to_lowercase()
        };

        if canonical != listener.protocol {
            tracing::trace!(
                entry = %entry.name,
                port = listener.port,
                from = %listener.protocol,
                to = %canonical,
                "Canonicalized listener protocol"
            );
            listener.protocol = canonical;
        }
    }
    Ok(())
}
