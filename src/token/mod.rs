// Internal modules
mod decode;
mod options;

// Public API exports
pub use decode::decode;
pub use options::DecodeOptions;
