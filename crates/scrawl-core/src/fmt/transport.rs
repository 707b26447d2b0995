//! Transport boundary.
//!
//! The engine requires exactly one operation from its host: accept a raw
//! byte run and persist or display it. The call is assumed to succeed or
//! abort the process; no partial-write contract is defined, and the engine
//! never reads back from the destination.

/// Destination for finished byte runs.
pub trait Transport {
    /// Deliver one byte run. `bytes` may be empty.
    fn flush(&mut self, bytes: &[u8]);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn flush(&mut self, bytes: &[u8]) {
        (**self).flush(bytes);
    }
}

/// In-memory transport capturing every run written through it.
///
/// The capture buffer may grow on the heap; that is the transport's
/// business, not the engine's.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryTransport {
    buf: Vec<u8>,
}

impl MemoryTransport {
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Everything captured so far.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Captured bytes as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    /// Discard the capture buffer contents.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Transport for MemoryTransport {
    fn flush(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}
