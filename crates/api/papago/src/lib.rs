use std::{sync::Arc, time::Duration};

use polyglot_interface::{
    LanguageSpec, LanguageTable, Translator,
    credential::{self, CredentialSource, ProcessEnv},
    error::Error,
    tables,
    transport::{Body, HttpRequest, HttpResponse, ReqwestTransport, Transport},
};
use serde::Deserialize;

pub const CLIENT_ID_ENV: &str = "PAPAGO_CLIENT_ID";
pub const SECRET_KEY_ENV: &str = "PAPAGO_SECRET_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://openapi.naver.com/v1/papago/n2mt";

pub struct PapagoTranslator {
    transport: Arc<dyn Transport>,
    endpoint: String,
    client_id: String,
    secret_key: String,
    languages: LanguageTable,
    spec: LanguageSpec,
}

pub struct PapagoBuilder {
    client_id: Option<String>,
    secret_key: Option<String>,
    source: String,
    target: String,
    endpoint: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for PapagoBuilder {
    fn default() -> Self {
        Self {
            client_id: None,
            secret_key: None,
            source: "auto".to_owned(),
            target: "en".to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            proxy: None,
            timeout: None,
            transport: None,
        }
    }
}

impl PapagoBuilder {
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<PapagoTranslator, Error> {
        self.build_with(&ProcessEnv)
    }

    pub fn build_with(self, env: &dyn CredentialSource) -> Result<PapagoTranslator, Error> {
        let client_id = credential::require(self.client_id, CLIENT_ID_ENV, env)?;
        let secret_key = credential::require(self.secret_key, SECRET_KEY_ENV, env)?;
        let languages = tables::papago();
        let spec = LanguageSpec::resolve(&languages, &self.source, &self.target)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.proxy.as_deref(), self.timeout)?),
        };
        Ok(PapagoTranslator {
            transport,
            endpoint: self.endpoint,
            client_id,
            secret_key,
            languages,
            spec,
        })
    }
}

impl PapagoTranslator {
    pub fn builder() -> PapagoBuilder {
        PapagoBuilder::default()
    }

    pub fn set_source(&mut self, source: &str) -> Result<(), Error> {
        self.spec = LanguageSpec::resolve(&self.languages, source, self.spec.target)?;
        Ok(())
    }

    pub fn set_target(&mut self, target: &str) -> Result<(), Error> {
        self.spec = LanguageSpec::resolve(&self.languages, self.spec.source, target)?;
        Ok(())
    }

    fn request(&self, text: &str) -> HttpRequest {
        let form = vec![
            ("source".to_owned(), self.spec.source.to_owned()),
            ("target".to_owned(), self.spec.target.to_owned()),
            ("text".to_owned(), text.to_owned()),
        ];
        HttpRequest::post(&self.endpoint, Body::Form(form))
            .header("X-Naver-Client-Id", self.client_id.as_str())
            .header("X-Naver-Client-Secret", self.secret_key.as_str())
    }

    fn extract(text: &str, response: HttpResponse) -> Result<String, Error> {
        let response = response.ensure_ok()?;
        let root: Root1 = serde_json::from_str(&response.body)?;
        root.message
            .and_then(|v| v.result)
            .and_then(|v| v.translated_text)
            .ok_or_else(|| Error::TranslationNotFound(text.to_owned()))
    }
}

impl Translator for PapagoTranslator {
    fn name(&self) -> &'static str {
        "papago"
    }

    fn languages(&self) -> LanguageTable {
        self.languages
    }

    fn language_spec(&self) -> LanguageSpec {
        self.spec
    }

    fn translate(&self, text: &str) -> Result<String, Error> {
        let text = self.validate_payload(text)?;
        log::debug!(
            "papago {} -> {}: {} chars",
            self.spec.source,
            self.spec.target,
            text.chars().count()
        );
        let response = self.transport.execute(self.request(text))?;
        Self::extract(text, response)
    }
}

#[derive(Deserialize)]
struct Result1 {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[derive(Deserialize)]
struct Message1 {
    result: Option<Result1>,
}

#[derive(Deserialize)]
struct Root1 {
    message: Option<Message1>,
}
