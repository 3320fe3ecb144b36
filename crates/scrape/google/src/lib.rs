use std::{sync::Arc, time::Duration};

use polyglot_interface::{
    LanguageSpec, LanguageTable, Translator,
    error::{Error, RequestError},
    html::{self, ElementQuery},
    payload, tables,
    throttle::{Sleeper, Throttle},
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
};

pub const BASE_URL: &str = "https://translate.google.com/m";
/// Longest text the web translator accepts.
pub const MAX_CHARS: usize = 5000;
/// Spacing kept between two requests so the unauthenticated endpoint does not
/// block us.
pub const DEFAULT_SPACING: Duration = Duration::from_secs(2);

const RESULT: ElementQuery = ElementQuery {
    tag: "div",
    attr: "class",
    value: "result-container",
};

/// Scrapes the mobile Google Translate page.
pub struct GoogleTranslator {
    transport: Arc<dyn Transport>,
    throttle: Throttle,
    languages: LanguageTable,
    spec: LanguageSpec,
}

pub struct GoogleBuilder {
    source: String,
    target: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
    spacing: Duration,
    sleeper: Option<Arc<dyn Sleeper>>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for GoogleBuilder {
    fn default() -> Self {
        Self {
            source: "auto".to_owned(),
            target: "en".to_owned(),
            proxy: None,
            timeout: None,
            spacing: DEFAULT_SPACING,
            sleeper: None,
            transport: None,
        }
    }
}

impl GoogleBuilder {
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

    /// Minimum time between two outbound requests, `Duration::ZERO` disables it.
    pub fn spacing(mut self, spacing: Duration) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<GoogleTranslator, Error> {
        let languages = tables::google();
        let spec = LanguageSpec::resolve(&languages, &self.source, &self.target)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.proxy.as_deref(), self.timeout)?),
        };
        let mut throttle = Throttle::new(self.spacing);
        if let Some(sleeper) = self.sleeper {
            throttle = throttle.with_sleeper(sleeper);
        }
        Ok(GoogleTranslator {
            transport,
            throttle,
            languages,
            spec,
        })
    }
}

impl GoogleTranslator {
    pub fn builder() -> GoogleBuilder {
        GoogleBuilder::default()
    }

    pub fn new(source: &str, target: &str) -> Result<Self, Error> {
        Self::builder().source(source).target(target).build()
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
        HttpRequest::get(BASE_URL)
            .query("tl", self.spec.target)
            .query("sl", self.spec.source)
            .query("q", text)
    }

    fn extract(text: &str, response: HttpResponse) -> Result<String, Error> {
        match response.status {
            429 => return Err(Error::TooManyRequests),
            200 => {}
            status => return Err(RequestError::Status(status).into()),
        }
        html::find_text(&response.body, &RESULT)
            .ok_or_else(|| Error::TranslationNotFound(text.to_owned()))
    }
}

impl Translator for GoogleTranslator {
    fn name(&self) -> &'static str {
        "google"
    }

    fn languages(&self) -> LanguageTable {
        self.languages
    }

    fn language_spec(&self) -> LanguageSpec {
        self.spec
    }

    fn validate_payload<'a>(&self, text: &'a str) -> Result<&'a str, Error> {
        let text = payload::validate_text(text)?;
        payload::validate_length(text, MAX_CHARS)?;
        Ok(text)
    }

    fn translate(&self, text: &str) -> Result<String, Error> {
        let text = self.validate_payload(text)?;
        self.throttle.wait();
        log::debug!(
            "google {} -> {}: {} chars",
            self.spec.source,
            self.spec.target,
            text.chars().count()
        );
        let response = self.transport.execute(self.request(text))?;
        Self::extract(text, response)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use polyglot_interface::{
        Translator as _,
        error::{Error, RequestError},
        throttle::Sleeper,
        transport::{HttpResponse, Method, stub::StubTransport},
    };

    use crate::GoogleTranslator;

    #[derive(Default)]
    struct CountingSleeper {
        calls: AtomicUsize,
    }

    impl Sleeper for CountingSleeper {
        fn sleep(&self, _: Duration) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn page(result: &str) -> String {
        format!(
            r#"<!DOCTYPE html><html><head><title>Google Translate</title></head><body>
            <div class="root-container"><div class="result-container">{result}</div></div>
            </body></html>"#
        )
    }

    fn echo() -> StubTransport {
        StubTransport::new(|req| {
            let q = req.query_value("q").unwrap_or_default();
            Ok(HttpResponse::new(200, page(&format!("  [{q}]  "))))
        })
    }

    fn translator(stub: &Arc<StubTransport>, sleeper: &Arc<CountingSleeper>) -> GoogleTranslator {
        let _ = env_logger::builder().is_test(true).try_init();
        GoogleTranslator::builder()
            .source("english")
            .target("german")
            .transport(stub.clone())
            .sleeper(sleeper.clone())
            .build()
            .expect("Failed to create translator")
    }

    #[test]
    fn query_request() {
        let stub = Arc::new(StubTransport::respond(200, &page("Hallo Welt")));
        let trans = translator(&stub, &Arc::default());
        assert_eq!(trans.translate("  Hello World ").unwrap(), "Hallo Welt");

        let req = &stub.requests()[0];
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, crate::BASE_URL);
        assert_eq!(req.query_value("tl"), Some("de"));
        assert_eq!(req.query_value("sl"), Some("en"));
        assert_eq!(req.query_value("q"), Some("Hello World"));
    }

    #[test]
    fn too_many_requests_is_distinct() {
        let stub = Arc::new(StubTransport::respond(429, "slow down"));
        let trans = translator(&stub, &Arc::default());
        assert!(matches!(trans.translate("hello"), Err(Error::TooManyRequests)));
    }

    #[test]
    fn other_status_is_request_error() {
        for status in [201, 404, 500, 503] {
            let stub = Arc::new(StubTransport::respond(status, &page("ignored")));
            let trans = translator(&stub, &Arc::default());
            match trans.translate("hello") {
                Err(Error::Request(RequestError::Status(s))) => assert_eq!(s, status),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn missing_element_carries_text() {
        let stub = Arc::new(StubTransport::respond(
            200,
            "<html><body><div class=\"error\">nothing</div></body></html>",
        ));
        let trans = translator(&stub, &Arc::default());
        match trans.translate("hello") {
            Err(Error::TranslationNotFound(text)) => assert_eq!(text, "hello"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn transport_failure_propagates() {
        let stub = Arc::new(StubTransport::fail("dns error"));
        let trans = translator(&stub, &Arc::default());
        assert!(matches!(
            trans.translate("hello"),
            Err(Error::Request(RequestError::Transport(_)))
        ));
    }

    #[test]
    fn invalid_input_sends_nothing() {
        let stub = Arc::new(echo());
        let sleeper = Arc::new(CountingSleeper::default());
        let trans = translator(&stub, &sleeper);
        assert!(matches!(trans.translate(" \t "), Err(Error::InvalidPayload(_))));
        let long = "a".repeat(crate::MAX_CHARS + 1);
        assert!(matches!(trans.translate(&long), Err(Error::InvalidPayload(_))));
        assert!(matches!(trans.translate_batch(&[]), Err(Error::InvalidPayload(_))));
        assert_eq!(stub.calls(), 0);
        assert_eq!(sleeper.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn batch_is_ordered_and_throttled() {
        let stub = Arc::new(echo());
        let sleeper = Arc::new(CountingSleeper::default());
        let trans = translator(&stub, &sleeper);
        let out = trans
            .translate_batch(&["a".into(), "b".into(), "c".into()])
            .unwrap();
        assert_eq!(out, vec!["[a]", "[b]", "[c]"]);
        assert_eq!(stub.calls(), 3);
        assert_eq!(sleeper.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn batch_aborts_on_failure() {
        let stub = Arc::new(StubTransport::new(|req| {
            match req.query_value("q") {
                Some("b") => Ok(HttpResponse::new(429, "")),
                Some(q) => Ok(HttpResponse::new(200, page(q))),
                None => Ok(HttpResponse::new(400, "")),
            }
        }));
        let trans = translator(&stub, &Arc::default());
        let res = trans.translate_batch(&["a".into(), "b".into(), "c".into()]);
        assert!(matches!(res, Err(Error::TooManyRequests)));
        assert_eq!(stub.calls(), 2);

        let items = trans
            .translate_batch_collecting(&["a".into(), "b".into(), "c".into()])
            .unwrap();
        assert_eq!(items[0].result.as_deref().unwrap(), "a");
        assert!(matches!(items[1].result, Err(Error::TooManyRequests)));
        assert_eq!(items[2].result.as_deref().unwrap(), "c");
    }

    #[test]
    fn unthrottled_instance_never_sleeps() {
        let stub = Arc::new(echo());
        let sleeper = Arc::new(CountingSleeper::default());
        let trans = GoogleTranslator::builder()
            .spacing(Duration::ZERO)
            .transport(stub.clone())
            .sleeper(sleeper.clone())
            .build()
            .unwrap();
        trans
            .translate_batch(&["a".into(), "b".into(), "c".into()])
            .unwrap();
        assert_eq!(sleeper.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn constructor_validates_languages() {
        assert!(GoogleTranslator::new("auto", "fr").is_ok());
        assert!(matches!(
            GoogleTranslator::new("english", "auto"),
            Err(Error::LanguageNotSupported(l)) if l == "auto"
        ));
        assert!(matches!(
            GoogleTranslator::new("elvish", "en"),
            Err(Error::LanguageNotSupported(l)) if l == "elvish"
        ));
    }

    #[test]
    fn reconfigure() {
        let stub = Arc::new(echo());
        let mut trans = translator(&stub, &Arc::default());
        trans.set_source("auto").unwrap();
        trans.set_target("Japanese").unwrap();
        trans.translate("x").unwrap();
        let req = &stub.requests()[0];
        assert_eq!(req.query_value("sl"), Some("auto"));
        assert_eq!(req.query_value("tl"), Some("ja"));
    }
}
