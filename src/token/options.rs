/// Configuration for a decode call
///
/// Both options default to off: `decode` with `DecodeOptions::default()`
/// returns the payload without shape validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Decode the header segment (part #1) instead of the payload (part #2)
    pub header: bool,

    /// Validate well-known field shapes for the selected segment
    pub validate: bool,
}

impl DecodeOptions {
    /// Create options with defaults (payload segment, no validation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the header segment instead of the payload
    pub fn header(mut self) -> Self {
        self.header = true;
        self
    }

    /// Enable shape validation for the selected segment
    pub fn validate(mut self) -> Self {
        self.validate = true;
        self
    }
}
