//! Single-use message bodies
//!
//! A [`Body`] can be read exactly once. Anything that reads it (a hook, the
//! transport) drains it, and a second read fails instead of silently
//! returning nothing. A hook that inspects a body is expected to install a
//! fresh one before handing the message on.

use std::fmt;
use std::io::{self, Read};

enum Inner {
    /// Fully buffered bytes
    Buffered(Vec<u8>),
    /// Arbitrary reader, drained on first read
    Reader(Box<dyn Read + Send>),
    /// Already read
    Consumed,
}

/// A body that can be read exactly once
pub struct Body {
    inner: Inner,
}

impl Body {
    /// An empty, readable body
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// A buffered body over the given bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Inner::Buffered(bytes.into()),
        }
    }

    /// A streaming body backed by a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Self {
            inner: Inner::Reader(Box::new(reader)),
        }
    }

    /// Length of the body when it is buffered
    pub fn len_hint(&self) -> Option<u64> {
        match &self.inner {
            Inner::Buffered(bytes) => Some(bytes.len() as u64),
            Inner::Reader(_) | Inner::Consumed => None,
        }
    }

    /// Whether the body has already been read
    pub fn is_consumed(&self) -> bool {
        matches!(self.inner, Inner::Consumed)
    }

    /// Read the whole body, leaving it consumed
    ///
    /// Fails if the underlying reader fails or if the body was read before.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        match std::mem::replace(&mut self.inner, Inner::Consumed) {
            Inner::Buffered(bytes) => Ok(bytes),
            Inner::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf)
            }
            Inner::Consumed => Err(io::Error::new(
                io::ErrorKind::Other,
                "body has already been consumed",
            )),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::from_bytes(text.into_bytes())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Buffered(bytes) => write!(f, "Body::Buffered({} bytes)", bytes.len()),
            Inner::Reader(_) => f.write_str("Body::Reader"),
            Inner::Consumed => f.write_str("Body::Consumed"),
        }
    }
}
