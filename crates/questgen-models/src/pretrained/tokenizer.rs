//! Building a [`Tokenizer`] from whichever assets a repository ships.

use std::path::Path;

use tokenizers::decoders::byte_level::ByteLevel as ByteLevelDecoder;
use tokenizers::decoders::wordpiece::WordPiece as WordPieceDecoder;
use tokenizers::models::bpe::BPE;
use tokenizers::models::wordpiece::WordPiece;
use tokenizers::normalizers::bert::BertNormalizer;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::pre_tokenizers::byte_level::ByteLevel;
use tokenizers::processors::bert::BertProcessing;
use tokenizers::processors::roberta::RobertaProcessing;
use tokenizers::Tokenizer;

use crate::error::{ModelError, ModelResult};

use super::files::TokenizerAssets;

/// Load a tokenizer for `repo_id` from fetched assets.
///
/// Legacy BPE assets get the byte-level pipeline with `<s> … </s>` framing;
/// legacy WordPiece assets get the BERT pipeline with `[CLS] … [SEP]`.
///
/// # Errors
/// - `ModelError::TokenizerError` if the assets cannot be parsed
pub fn load_tokenizer<P: AsRef<Path>>(
    repo_id: &str,
    assets: &TokenizerAssets<P>,
) -> ModelResult<Tokenizer> {
    let err = |message: String| ModelError::TokenizerError {
        repo_id: repo_id.to_string(),
        message,
    };

    let tokenizer = match assets {
        TokenizerAssets::Fast { tokenizer } => {
            Tokenizer::from_file(tokenizer.as_ref()).map_err(|e| err(e.to_string()))?
        }
        TokenizerAssets::Bpe { vocab, merges } => {
            let bpe = BPE::from_file(&path_str(repo_id, vocab)?, &path_str(repo_id, merges)?)
                .build()
                .map_err(|e| err(e.to_string()))?;
            let mut tokenizer = Tokenizer::new(bpe);
            tokenizer
                .with_pre_tokenizer(ByteLevel::default().add_prefix_space(false))
                .with_decoder(ByteLevelDecoder::default());
            if let (Some(bos), Some(eos)) = (tokenizer.token_to_id("<s>"), tokenizer.token_to_id("</s>")) {
                tokenizer.with_post_processor(RobertaProcessing::new(
                    ("</s>".to_string(), eos),
                    ("<s>".to_string(), bos),
                ));
            }
            tokenizer
        }
        TokenizerAssets::WordPiece { vocab } => {
            let wordpiece = WordPiece::from_file(&path_str(repo_id, vocab)?)
                .build()
                .map_err(|e| err(e.to_string()))?;
            let mut tokenizer = Tokenizer::new(wordpiece);
            tokenizer
                .with_normalizer(BertNormalizer::default())
                .with_pre_tokenizer(BertPreTokenizer)
                .with_decoder(WordPieceDecoder::default());
            if let (Some(cls), Some(sep)) = (tokenizer.token_to_id("[CLS]"), tokenizer.token_to_id("[SEP]")) {
                tokenizer.with_post_processor(BertProcessing::new(
                    ("[SEP]".to_string(), sep),
                    ("[CLS]".to_string(), cls),
                ));
            }
            tokenizer
        }
    };

    if tokenizer.get_vocab_size(true) == 0 {
        return Err(err("empty vocabulary".to_string()));
    }
    Ok(tokenizer)
}

fn path_str<P: AsRef<Path>>(repo_id: &str, path: &P) -> ModelResult<String> {
    path.as_ref()
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| ModelError::TokenizerError {
            repo_id: repo_id.to_string(),
            message: format!("non UTF-8 path {}", path.as_ref().display()),
        })
}
