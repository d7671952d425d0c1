use std::fmt;

/// An owned image payload produced by a capture surface.
///
/// `ImageData` is an opaque handle around the raw encoded bytes. It keeps
/// image contents out of logs and diagnostics: `Debug` and `Display` print
/// the payload length only, never the bytes themselves. Access to the data
/// is explicit through [`as_bytes`](Self::as_bytes) /
/// [`into_bytes`](Self::into_bytes).
///
/// # Examples
///
/// ```
/// use picker_flow::ImageData;
///
/// let image = ImageData::new(vec![0xFF, 0xD8, 0xFF]);
/// assert_eq!(format!("{:?}", image), "ImageData(3 bytes)");
/// assert_eq!(image.len(), 3);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    bytes: Vec<u8>,
}

impl ImageData {
    /// Wraps raw encoded image bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The encoded payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the handle and returns the payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty. An empty payload is what the flow
    /// classifies as a missing image.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for ImageData {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for ImageData {
    // Length only. Image bytes must never end up in logs or error output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageData({} bytes)", self.bytes.len())
    }
}

impl fmt::Display for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image of {} bytes", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_shows_payload() {
        let image = ImageData::new(b"secret-pixels".to_vec());
        let debug_output = format!("{:?}", image);

        assert_eq!(debug_output, "ImageData(13 bytes)");
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn empty_payload_is_detectable() {
        assert!(ImageData::new(Vec::new()).is_empty());
        assert!(!ImageData::new(vec![1]).is_empty());
    }

    #[test]
    fn round_trips_bytes() {
        let image = ImageData::from(vec![1, 2, 3]);
        assert_eq!(image.as_bytes(), &[1, 2, 3]);
        assert_eq!(image.into_bytes(), vec![1, 2, 3]);
    }
}
