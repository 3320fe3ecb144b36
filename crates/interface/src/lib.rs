pub mod batch;
pub mod credential;
pub mod error;
pub mod html;
pub mod language;
pub mod payload;
pub mod tables;
pub mod throttle;
pub mod transport;

use std::path::Path;

use crate::batch::BatchItem;
use crate::error::Error;
pub use crate::language::{AUTO, LanguageSpec, LanguageTable, SupportedLanguages};

/// Capabilities shared by every backend.
///
/// Implementors provide the table, the resolved languages and a single-text
/// `translate`; batches, files and language queries are derived from those.
pub trait Translator: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    fn languages(&self) -> LanguageTable;

    fn language_spec(&self) -> LanguageSpec;

    /// Translates one text with exactly one provider request.
    fn translate(&self, text: &str) -> Result<String, Error>;

    fn source(&self) -> &'static str {
        self.language_spec().source
    }

    fn target(&self) -> &'static str {
        self.language_spec().target
    }

    fn resolve_languages(&self, languages: &[&str]) -> Result<Vec<&'static str>, Error> {
        self.languages().resolve_all(languages)
    }

    fn is_language_supported(&self, languages: &[&str]) -> bool {
        self.languages().is_supported(languages)
    }

    fn validate_payload<'a>(&self, text: &'a str) -> Result<&'a str, Error> {
        payload::validate_text(text)
    }

    fn get_supported_languages(&self, as_dict: bool) -> SupportedLanguages {
        self.languages().supported_languages(as_dict)
    }

    fn translate_file(&self, path: &Path) -> Result<String, Error> {
        let text = std::fs::read_to_string(path)?;
        self.translate(text.trim())
    }

    fn translate_batch(&self, batch: &[String]) -> Result<Vec<String>, Error> {
        batch::run(batch, |text| self.translate(text))
    }

    /// Translates every text even if some fail.
    fn translate_batch_collecting(&self, batch: &[String]) -> Result<Vec<BatchItem>, Error> {
        batch::run_collecting(batch, |text| self.translate(text))
    }

    #[deprecated(note = "use translate_batch instead")]
    fn translate_sentences(&self, sentences: &[String]) -> Result<Vec<String>, Error> {
        log::warn!("translate_sentences is deprecated, use translate_batch instead");
        self.translate_batch(sentences)
    }
}
