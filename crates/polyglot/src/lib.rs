mod backend;
pub mod config;

pub use backend::Backend;
pub use config::{BackendConfig, ConfigError};
pub use polyglot_interface::{
    AUTO, LanguageSpec, LanguageTable, SupportedLanguages, Translator,
    batch::BatchItem,
    credential::{CredentialSource, ProcessEnv},
    error::{Error, RequestError},
    throttle::{Sleeper, Throttle},
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
};

pub use polyglot_chatgpt::{ChatGptBuilder, ChatGptTranslator};
pub use polyglot_google::{GoogleBuilder, GoogleTranslator};
pub use polyglot_papago::{PapagoBuilder, PapagoTranslator};
