use polyglot_chatgpt::ChatGptTranslator;
use polyglot_google::GoogleTranslator;
use polyglot_interface::{LanguageSpec, LanguageTable, Translator, error::Error};
use polyglot_papago::PapagoTranslator;

/// One translator per provider family, chosen explicitly by the caller.
pub enum Backend {
    /// Prompt based chat completion
    ChatGpt(ChatGptTranslator),
    /// Scraped web page, query parameters
    Google(GoogleTranslator),
    /// Authenticated REST api, form payload
    Papago(PapagoTranslator),
}

impl Backend {
    fn inner(&self) -> &dyn Translator {
        match self {
            Backend::ChatGpt(t) => t,
            Backend::Google(t) => t,
            Backend::Papago(t) => t,
        }
    }

    pub fn set_source(&mut self, source: &str) -> Result<(), Error> {
        match self {
            Backend::ChatGpt(t) => t.set_source(source),
            Backend::Google(t) => t.set_source(source),
            Backend::Papago(t) => t.set_source(source),
        }
    }

    pub fn set_target(&mut self, target: &str) -> Result<(), Error> {
        match self {
            Backend::ChatGpt(t) => t.set_target(target),
            Backend::Google(t) => t.set_target(target),
            Backend::Papago(t) => t.set_target(target),
        }
    }
}

impl Translator for Backend {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn languages(&self) -> LanguageTable {
        self.inner().languages()
    }

    fn language_spec(&self) -> LanguageSpec {
        self.inner().language_spec()
    }

    fn validate_payload<'a>(&self, text: &'a str) -> Result<&'a str, Error> {
        self.inner().validate_payload(text)
    }

    fn translate(&self, text: &str) -> Result<String, Error> {
        self.inner().translate(text)
    }
}

impl From<ChatGptTranslator> for Backend {
    fn from(value: ChatGptTranslator) -> Self {
        Backend::ChatGpt(value)
    }
}

impl From<GoogleTranslator> for Backend {
    fn from(value: GoogleTranslator) -> Self {
        Backend::Google(value)
    }
}

impl From<PapagoTranslator> for Backend {
    fn from(value: PapagoTranslator) -> Self {
        Backend::Papago(value)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use polyglot_interface::{
        Translator as _,
        error::Error,
        transport::{HttpResponse, stub::StubTransport},
    };

    use super::*;

    fn google(stub: &Arc<StubTransport>) -> Backend {
        let _ = env_logger::builder().is_test(true).try_init();
        GoogleTranslator::builder()
            .target("french")
            .spacing(Duration::ZERO)
            .transport(stub.clone())
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn dispatches_to_variant() {
        let stub = Arc::new(StubTransport::new(|req| {
            let q = req.query_value("q").unwrap_or_default();
            Ok(HttpResponse::new(
                200,
                format!(r#"<div class="result-container">{q}!</div>"#),
            ))
        }));
        let backend = google(&stub);
        assert_eq!(backend.name(), "google");
        assert_eq!(backend.target(), "fr");
        assert_eq!(backend.translate("salut").unwrap(), "salut!");
        assert_eq!(
            backend
                .translate_batch(&["a".into(), "b".into()])
                .unwrap(),
            vec!["a!", "b!"]
        );
        assert_eq!(stub.calls(), 3);
    }

    #[test]
    fn validation_uses_variant_rules() {
        let stub = Arc::new(StubTransport::respond(200, ""));
        let backend = google(&stub);
        let long = "x".repeat(polyglot_google::MAX_CHARS + 1);
        assert!(matches!(backend.translate(&long), Err(Error::InvalidPayload(_))));
        assert_eq!(stub.calls(), 0);
    }

    #[test]
    fn reconfigure_through_enum() {
        let stub = Arc::new(StubTransport::respond(200, ""));
        let mut backend: Backend = PapagoTranslator::builder()
            .client_id("id")
            .secret_key("secret")
            .transport(stub)
            .build()
            .unwrap()
            .into();
        backend.set_target("japanese").unwrap();
        assert_eq!(backend.target(), "ja");
        assert!(backend.set_target("swahili").is_err());
        assert_eq!(backend.target(), "ja");
    }
}
