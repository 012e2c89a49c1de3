/// Error type for query translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A terminal clause matched none of the recognized shapes. Carries the
    /// offending fragment verbatim.
    UnrecognizedExpression(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::UnrecognizedExpression(fragment) => {
                write!(f, "unrecognized expression: {}", fragment)
            }
        }
    }
}

impl std::error::Error for TranslateError {}
