#[derive(Debug)]
/// Represents all errors that can occur while casting between sample types.
pub enum CastError {
    /// Neither the 64-bit integer nor the 64-bit floating representation is
    /// mutually supported by the two sample types, and no scratch value was
    /// supplied to fall back on.
    Unsupported {
        /// The name of the source sample type.
        from: &'static str,
        /// The name of the destination sample type.
        to:   &'static str,
    },
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { from, to } => write!(f,
                                                     "Could not find a suitable cast from '{from}' to '{to}'. Pass a scratch value to cast_with_scratch()."),
        }
    }
}

impl std::error::Error for CastError {}
