use std::collections::BTreeMap;

use crate::error::Error;

/// Sentinel accepted as a source language, asking the provider to detect it.
pub const AUTO: &str = "auto";

pub type Table = BTreeMap<&'static str, &'static str>;

/// Read-only mapping from lowercase canonical language names to the codes a
/// provider understands.
#[derive(Clone, Copy, Debug)]
pub struct LanguageTable {
    entries: &'static Table,
}

impl LanguageTable {
    pub const fn new(entries: &'static Table) -> Self {
        Self { entries }
    }

    /// Maps a name or code to a provider code.
    ///
    /// `auto` is returned as is, known codes are returned as is and canonical
    /// names (matched case-insensitively) are replaced by their code.
    pub fn resolve(&self, language: &str) -> Result<&'static str, Error> {
        if language == AUTO {
            return Ok(AUTO);
        }
        if let Some(code) = self.entries.values().copied().find(|code| *code == language) {
            return Ok(code);
        }
        self.entries
            .get(language.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::LanguageNotSupported(language.to_owned()))
    }

    pub fn resolve_all<S: AsRef<str>>(&self, languages: &[S]) -> Result<Vec<&'static str>, Error> {
        languages.iter().map(|v| self.resolve(v.as_ref())).collect()
    }

    pub fn is_supported<S: AsRef<str>>(&self, languages: &[S]) -> bool {
        self.resolve_all(languages).is_ok()
    }

    /// Canonical name of a provider code, used where a provider wants prose
    /// instead of codes.
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| **v == code)
            .map(|(name, _)| *name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.entries.values().copied().collect()
    }

    pub fn supported_languages(&self, as_dict: bool) -> SupportedLanguages {
        match as_dict {
            true => SupportedLanguages::Map(self.entries.clone()),
            false => SupportedLanguages::List(self.names()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SupportedLanguages {
    /// Canonical names only
    List(Vec<&'static str>),
    /// Canonical name to provider code
    Map(Table),
}

/// Source and target of a translator after resolution against its table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageSpec {
    pub source: &'static str,
    pub target: &'static str,
}

impl LanguageSpec {
    pub fn resolve(table: &LanguageTable, source: &str, target: &str) -> Result<Self, Error> {
        let source = table.resolve(source)?;
        if target == AUTO {
            return Err(Error::LanguageNotSupported(target.to_owned()));
        }
        let target = table.resolve(target)?;
        Ok(Self { source, target })
    }
}
