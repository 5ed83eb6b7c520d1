// ============================================================
// Layer 3: Document Domain Type
// ============================================================
// One labelled post. Documents are ephemeral: the trainer and
// the evaluator consume each one immediately and never keep it.
//
// Why bytes and not String?
//   Input files are not guaranteed to be UTF-8. A Latin-1 "é" or a
//   stray 0x80 byte is still a perfectly good token, and labels and
//   tokens are compared byte for byte. Decoding would either reject
//   the row or merge distinct byte sequences into U+FFFD.
//
// Reference: Rust Book §8.2 (Strings are UTF-8; bytes are not)

/// A single (label, text) record from a training or test stream.
///
/// `label` comes from the `tag` column, `text` from `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The category attached to this post
    pub label: Vec<u8>,

    /// Raw post body, untouched (no decoding, no case folding)
    pub text: Vec<u8>,
}

impl Document {
    /// Create a new Document. Accepts `&str`, `String`, `&[u8]`,
    /// `Vec<u8>` and anything else convertible into bytes.
    ///
    /// Example:
    ///   let doc = Document::new("euchre", "who leads the first trick");
    pub fn new(label: impl Into<Vec<u8>>, text: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            text:  text.into(),
        }
    }
}
