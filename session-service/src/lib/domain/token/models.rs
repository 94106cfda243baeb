/// Association of a subject to its single currently-active token value.
///
/// At most one `Token` is active per subject per token class at any instant;
/// saving a new one supersedes the previous association. The signed value is
/// opaque at this layer: claims are always re-derived by verification, never
/// read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub subject: u64,
    pub value: String,
}

impl Token {
    pub fn new(subject: u64, value: impl Into<String>) -> Self {
        Self {
            subject,
            value: value.into(),
        }
    }
}
