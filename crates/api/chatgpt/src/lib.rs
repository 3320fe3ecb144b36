use std::{sync::Arc, time::Duration};

use polyglot_interface::{
    LanguageSpec, LanguageTable, Translator,
    credential::{self, CredentialSource, ProcessEnv},
    error::Error,
    payload, tables,
    transport::{Body, HttpRequest, HttpResponse, ReqwestTransport, Transport},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Translates by asking a chat completion model.
pub struct ChatGptTranslator {
    transport: Arc<dyn Transport>,
    api_key: String,
    model: String,
    endpoint: String,
    system_prompt: Option<String>,
    languages: LanguageTable,
    spec: LanguageSpec,
}

pub struct ChatGptBuilder {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    system_prompt: Option<String>,
    source: String,
    target: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ChatGptBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            system_prompt: None,
            source: "auto".to_owned(),
            target: "english".to_owned(),
            proxy: None,
            timeout: None,
            transport: None,
        }
    }
}

impl ChatGptBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Alternate OpenAI compatible completion endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
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

    pub fn build(self) -> Result<ChatGptTranslator, Error> {
        self.build_with(&ProcessEnv)
    }

    pub fn build_with(self, env: &dyn CredentialSource) -> Result<ChatGptTranslator, Error> {
        let api_key = credential::require(self.api_key, API_KEY_ENV, env)?;
        let languages = tables::google();
        let spec = LanguageSpec::resolve(&languages, &self.source, &self.target)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.proxy.as_deref(), self.timeout)?),
        };
        Ok(ChatGptTranslator {
            transport,
            api_key,
            model: self.model,
            endpoint: self.endpoint,
            system_prompt: self.system_prompt.filter(|v| !v.trim().is_empty()),
            languages,
            spec,
        })
    }
}

impl ChatGptTranslator {
    pub fn builder() -> ChatGptBuilder {
        ChatGptBuilder::default()
    }

    pub fn set_target(&mut self, target: &str) -> Result<(), Error> {
        self.spec = LanguageSpec::resolve(&self.languages, self.spec.source, target)?;
        Ok(())
    }

    pub fn set_source(&mut self, source: &str) -> Result<(), Error> {
        self.spec = LanguageSpec::resolve(&self.languages, source, self.spec.target)?;
        Ok(())
    }

    fn instruction(&self, text: &str) -> Result<String, Error> {
        let target = self
            .languages
            .name_of(self.spec.target)
            .unwrap_or(self.spec.target);
        let prompt = format!("Translate the text below into {target}.\nText: \"{text}\"");
        payload::validate_text(&prompt)?;
        Ok(prompt)
    }

    fn request(&self, text: &str) -> Result<HttpRequest, Error> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system_prompt {
            messages.push(Message {
                role: "system",
                content: system.clone(),
            });
        }
        messages.push(Message {
            role: "user",
            content: self.instruction(text)?,
        });
        let body = json!({ "model": self.model, "messages": messages });
        Ok(HttpRequest::post(&self.endpoint, Body::Json(body))
            .header("Authorization", format!("Bearer {}", self.api_key)))
    }

    fn extract(text: &str, response: HttpResponse) -> Result<String, Error> {
        let response = response.ensure_ok()?;
        let completion: Completion = serde_json::from_str(&response.body)?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|v| v.message)
            .and_then(|v| v.content)
            .ok_or_else(|| Error::TranslationNotFound(text.to_owned()))
    }
}

impl Translator for ChatGptTranslator {
    fn name(&self) -> &'static str {
        "chatgpt"
    }

    fn languages(&self) -> LanguageTable {
        self.languages
    }

    fn language_spec(&self) -> LanguageSpec {
        self.spec
    }

    fn translate(&self, text: &str) -> Result<String, Error> {
        let text = self.validate_payload(text)?;
        let request = self.request(text)?;
        log::debug!(
            "asking {} to translate {} chars",
            self.model,
            text.chars().count()
        );
        let response = self.transport.execute(request)?;
        Self::extract(text, response)
    }
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct Reply {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<Reply>,
}

#[derive(Deserialize)]
struct Completion {
    #[serde(default)]
    choices: Vec<Choice>,
}
