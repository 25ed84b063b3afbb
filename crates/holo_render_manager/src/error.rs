use holo_render_models::CommandKind;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// Failure reported by a [crate::Transport]. The session never retries nor interprets it.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(holo_render::transport))]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    /// Raised before anything is sent, a display list is never partially submitted.
    #[error("unknown primitive shape `{name}`")]
    #[diagnostic(
        code(holo_render::shape_resolution),
        help("known shapes are cube, capsule, cylinder, sphere, plane and quad")
    )]
    ShapeResolution { name: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Transport(#[from] TransportError),

    #[error("render session is not connected")]
    #[diagnostic(code(holo_render::not_connected), help("call start() first"))]
    NotConnected,

    #[error("display list of {expected} commands was answered with {received} results")]
    #[diagnostic(code(holo_render::result_shape_mismatch))]
    ResultShapeMismatch { expected: usize, received: usize },

    #[error("result {position} is read as a handle but its command is {kind:?}")]
    #[diagnostic(code(holo_render::unexpected_command))]
    UnexpectedCommand {
        position: usize,
        kind: Option<CommandKind>,
    },
}
