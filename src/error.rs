use thiserror::Error;

/// Errors produced while parsing plugin references and resolving their
/// repositories.
///
/// Variants fall into two classes. Format errors (a malformed reference
/// string or a malformed JSON document) are fatal to parsing that single
/// reference or document. Incomplete-reference errors (too few path segments)
/// are fatal to repository resolution only; the plugin's name, label, and
/// identifier remain computable.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("could not parse plugin location \"{reference}\"")]
    MalformedReference {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    #[error("too many #'s in \"{reference}\"")]
    AmbiguousVersion { reference: String },

    #[error("JSON structure was not an array")]
    DefinitionNotAnArray,

    #[error("configuration for \"{location}\" is not a hash")]
    ConfigurationNotAHash { location: String },

    #[error("unknown type in plugin definition ({kind})")]
    UnknownDefinitionType { kind: String },

    #[error("invalid plugin JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing plugin location")]
    MissingLocation,

    #[error("incomplete plugin path \"{location}\"")]
    IncompletePath { location: String },

    #[error("incomplete {host} path \"{location}\"")]
    IncompleteHostPath { host: String, location: String },
}

pub type Result<T> = std::result::Result<T, PluginError>;
