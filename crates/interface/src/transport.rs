use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, RequestError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

/// A provider request, built fresh for every call.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn post(url: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::Post,
            body,
            ..Self::get(url)
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.push((key.to_owned(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Fails with `RequestError::Status` unless the provider answered 200.
    pub fn ensure_ok(self) -> Result<Self, Error> {
        match self.is_ok() {
            true => Ok(self),
            false => Err(RequestError::Status(self.status).into()),
        }
    }
}

/// Sends one request and hands back whatever the provider answered.
///
/// Implementations never retry and never interpret the status code.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(proxy: Option<&str>, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(proxy) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder = match &request.body {
            Body::Empty => builder,
            Body::Form(form) => builder.form(form),
            Body::Json(json) => builder.json(json),
        };
        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("{} {} -> {status}", method_name(request.method), request.url);
        Ok(HttpResponse { status, body })
    }
}

fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
    }
}

#[cfg(any(test, feature = "stub"))]
pub mod stub {
    use std::sync::Mutex;

    use super::*;

    type Handler = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, Error> + Send + Sync>;

    /// Transport answering from a closure and recording every request.
    pub struct StubTransport {
        handler: Handler,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        pub fn new<F>(handler: F) -> Self
        where
            F: Fn(&HttpRequest) -> Result<HttpResponse, Error> + Send + Sync + 'static,
        {
            Self {
                handler: Box::new(handler),
                requests: Mutex::default(),
            }
        }

        pub fn respond(status: u16, body: &str) -> Self {
            let body = body.to_owned();
            Self::new(move |_| Ok(HttpResponse::new(status, body.clone())))
        }

        pub fn fail(message: &'static str) -> Self {
            Self::new(move |_| Err(RequestError::Transport(message.into()).into()))
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Transport for StubTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
            let response = (self.handler)(&request);
            self.requests.lock().unwrap().push(request);
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builders() {
        let req = HttpRequest::get("https://example.com")
            .query("q", "hi")
            .header("Authorization", "Bearer x");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.query_value("q"), Some("hi"));
        assert_eq!(req.header_value("authorization"), Some("Bearer x"));
        assert_eq!(req.body, Body::Empty);
    }

    #[test]
    fn ensure_ok_keeps_status() {
        assert!(HttpResponse::new(200, "").ensure_ok().is_ok());
        match HttpResponse::new(503, "").ensure_ok() {
            Err(Error::Request(RequestError::Status(503))) => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}
