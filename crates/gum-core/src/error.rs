//! Error kinds for a single launch run.
//!
//! Every variant is terminal: the pipeline stops at the first one and the
//! caller decides how much detail to show.

use std::path::PathBuf;

/// Boxed cause for kinds whose underlying failure comes from several crates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not load configuration: {path}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("could not parse URL: {raw}")]
    ParseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("app config does not support: {0}")]
    UnsupportedProtocol(String),

    #[error("could not parse host: {0}")]
    HostPortSplit(String),

    #[error("could not parse username: {0}")]
    UsernameDecode(String),

    #[error("could not decode fragment: {fragment}")]
    FragmentDecode {
        fragment: String,
        #[source]
        source: BoxError,
    },

    #[error("could not render template: {template}")]
    TemplateRender {
        template: String,
        #[source]
        source: handlebars::RenderError,
    },

    #[error("file I/O failed: {path}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start: {program}")]
    Launch {
        program: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn fragment(fragment: &str, source: impl Into<BoxError>) -> Self {
        Error::FragmentDecode {
            fragment: fragment.to_string(),
            source: source.into(),
        }
    }
}
