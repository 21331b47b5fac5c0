//! Error type shared by the codec, the envelope and the transport helpers.

/// Everything that can go wrong while turning bytes into messages.
///
/// Encoding never fails, so every variant belongs to the inbound path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fewer bytes were available than the layout needs.
    #[error("truncated input: needed {needed} bytes, {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// The header's type tag or total length disagrees with the record it names.
    #[error("header mismatch: type {msg_type} with length {msg_len}")]
    HeaderMismatch { msg_type: i8, msg_len: u32 },

    #[error("unknown message type {0}")]
    UnknownType(i8),

    /// The declared total length cannot describe a valid frame.
    #[error("invalid message length {0}")]
    InvalidLength(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_input_display() {
        let err = Error::TruncatedInput {
            needed: 28,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("28"), "expected '28' in: {msg}");
        assert!(msg.contains('3'), "expected '3' in: {msg}");
    }

    #[test]
    fn header_mismatch_display() {
        let err = Error::HeaderMismatch {
            msg_type: -7,
            msg_len: 99,
        };
        let msg = err.to_string();
        assert!(msg.contains("-7"), "expected '-7' in: {msg}");
        assert!(msg.contains("99"), "expected '99' in: {msg}");
    }

    #[test]
    fn io_error_converts() {
        fn fallible() -> Result<(), Error> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))?
        }
        assert!(matches!(fallible(), Err(Error::Io(_))));
    }
}
