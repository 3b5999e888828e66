//! Streaming support for generation responses.
//!
//! The generation endpoint streams the document as raw text chunks with no
//! envelope, so this module does three things:
//! - decodes the byte stream incrementally, carrying partial multi-byte
//!   UTF-8 sequences across chunk boundaries (`Utf8StreamDecoder`)
//! - accumulates the decoded text for the lifetime of one session
//!   (`StreamBuffer`)
//! - derives a presentation-ready document from the whole accumulated text
//!   after every increment (`normalize`)
//!
//! `normalize` is a pure function of the buffer: it is re-run over the entire
//! accumulated text on every chunk, so fence markers that straddle a chunk
//! boundary are always stripped once the closing bytes arrive. That trades
//! recomputation for correctness; buffers are bounded by realistic document
//! sizes (tens of KB), so the cost does not matter.
//!
//! ## Example
//!
//! ```rust
//! use sitegen_client::streaming::{normalize, StreamBuffer};
//!
//! let mut buffer = StreamBuffer::new();
//! buffer.ingest(b"```html\n<h1>Hi</h1>\n```").unwrap();
//!
//! let document = normalize(buffer.as_str());
//! assert_eq!(document, "<!DOCTYPE html>\n<h1>Hi</h1>");
//! ```

mod buffer;
mod decoder;
mod normalize;

pub use buffer::StreamBuffer;
pub use decoder::Utf8StreamDecoder;
pub use normalize::normalize;
