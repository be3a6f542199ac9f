//! Tokenizer families and the assets each one can be built from.

/// Tokenizer family of a checkpoint.
///
/// Every family is loaded from `tokenizer.json` when the repository ships
/// one; otherwise from the family's legacy vocabulary files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenizerFamily {
    /// BART byte-level BPE (`vocab.json` + `merges.txt`).
    BartBpe,
    /// RoBERTa byte-level BPE (`vocab.json` + `merges.txt`).
    RobertaBpe,
    /// BERT WordPiece (`vocab.txt`).
    BertWordpiece,
}

impl TokenizerFamily {
    /// Serialized fast-tokenizer file name.
    pub const FAST_TOKENIZER_FILE: &'static str = "tokenizer.json";

    /// Legacy files the tokenizer can be rebuilt from.
    #[must_use]
    pub const fn legacy_files(&self) -> &'static [&'static str] {
        match self {
            Self::BartBpe | Self::RobertaBpe => &["vocab.json", "merges.txt"],
            Self::BertWordpiece => &["vocab.txt"],
        }
    }

    /// Returns `true` for byte-level BPE families.
    #[inline]
    #[must_use]
    pub const fn is_byte_level(&self) -> bool {
        matches!(self, Self::BartBpe | Self::RobertaBpe)
    }
}
