use crate::error::Error;

/// Where a translator looks up credentials that were not passed explicitly.
pub trait CredentialSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads process environment variables.
pub struct ProcessEnv;

impl CredentialSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<F> CredentialSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Uses `explicit` if given, otherwise the `env_var` of `source`. Blank values
/// count as missing.
pub fn require(
    explicit: Option<String>,
    env_var: &'static str,
    source: &dyn CredentialSource,
) -> Result<String, Error> {
    explicit
        .or_else(|| source.var(env_var))
        .filter(|v| !v.trim().is_empty())
        .ok_or(Error::ApiKey { env_var })
}
