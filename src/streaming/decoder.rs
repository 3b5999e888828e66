//! Incremental UTF-8 decoding for chunked byte streams.

use crate::error::DecodeError;

/// Stateful byte-to-text decoder for a chunked stream.
///
/// HTTP chunk boundaries fall anywhere, including in the middle of a
/// multi-byte UTF-8 character. The decoder keeps the incomplete trailing
/// sequence (at most 3 bytes) between `decode` calls and prepends it to the
/// next chunk, so every returned string is whole characters only.
///
/// Each decoder belongs to exactly one session and is never shared; a new
/// session gets a fresh one.
#[derive(Debug, Default)]
pub struct Utf8StreamDecoder {
    pending: Vec<u8>,
}

impl Utf8StreamDecoder {
    /// Create a new decoder with no pending state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one chunk, combining it with any bytes held over from the
    /// previous call.
    ///
    /// Returns the decoded text, which is empty when the chunk only extended
    /// an incomplete sequence. Fails on bytes that can never form valid
    /// UTF-8; a decode failure is unrecoverable for the session.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<String, DecodeError> {
        let carried;
        let bytes: &[u8] = if self.pending.is_empty() {
            chunk
        } else {
            let mut combined = std::mem::take(&mut self.pending);
            combined.extend_from_slice(chunk);
            carried = combined;
            &carried
        };

        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(err) => {
                let valid = err.valid_up_to();
                if err.error_len().is_some() {
                    // A definitely-invalid sequence, not a chunk boundary.
                    return Err(DecodeError::InvalidSequence { position: valid });
                }
                self.pending = bytes[valid..].to_vec();
                // The prefix up to valid_up_to() is valid UTF-8, so the lossy
                // conversion is exact.
                Ok(String::from_utf8_lossy(&bytes[..valid]).into_owned())
            }
        }
    }

    /// Check that no partial sequence is left dangling.
    ///
    /// Call this at end of stream: a stream that stops mid-character is a
    /// decode failure, not a silent drop.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TruncatedSequence {
                pending: self.pending.len(),
            })
        }
    }

    /// Number of bytes waiting for the rest of their character.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        let mut decoder = Utf8StreamDecoder::new();
        let text = decoder.decode(b"hello world").unwrap();
        assert_eq!(text, "hello world");
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn test_decode_empty_chunk() {
        let mut decoder = Utf8StreamDecoder::new();
        let text = decoder.decode(b"").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_decode_multibyte_split_across_chunks() {
        // U+4E16 (three bytes) split after its first byte
        let bytes = "世界".as_bytes();
        let mut decoder = Utf8StreamDecoder::new();

        let first = decoder.decode(&bytes[..1]).unwrap();
        assert_eq!(first, "");
        assert_eq!(decoder.pending_len(), 1);

        let second = decoder.decode(&bytes[1..]).unwrap();
        assert_eq!(second, "世界");
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn test_decode_emoji_split_byte_by_byte() {
        let bytes = "🦀".as_bytes();
        let mut decoder = Utf8StreamDecoder::new();
        let mut output = String::new();

        for byte in bytes {
            output.push_str(&decoder.decode(std::slice::from_ref(byte)).unwrap());
        }

        assert_eq!(output, "🦀");
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn test_decode_split_inside_mixed_text() {
        let bytes = "a✓b".as_bytes();
        let mut decoder = Utf8StreamDecoder::new();

        // Split inside the check mark (bytes 1..4)
        let first = decoder.decode(&bytes[..2]).unwrap();
        assert_eq!(first, "a");

        let second = decoder.decode(&bytes[2..]).unwrap();
        assert_eq!(second, "✓b");
    }

    #[test]
    fn test_decode_invalid_sequence() {
        let mut decoder = Utf8StreamDecoder::new();
        let result = decoder.decode(&[0x68, 0x69, 0xFF]);
        assert_eq!(result, Err(DecodeError::InvalidSequence { position: 2 }));
    }

    #[test]
    fn test_decode_invalid_continuation() {
        let mut decoder = Utf8StreamDecoder::new();
        // Start of a 3-byte sequence followed by a non-continuation byte
        let result = decoder.decode(&[0xE4, 0x41]);
        assert!(matches!(result, Err(DecodeError::InvalidSequence { .. })));
    }

    #[test]
    fn test_finish_with_dangling_partial() {
        let mut decoder = Utf8StreamDecoder::new();
        decoder.decode(&"世".as_bytes()[..2]).unwrap();

        assert_eq!(
            decoder.finish(),
            Err(DecodeError::TruncatedSequence { pending: 2 })
        );
    }
}
