use rslider::{SliderConfigBuilderError, SliderError};
use thiserror::Error;

/// Reasons mounting a slider hook fails.
#[derive(Debug, Error)]
pub enum HookError {
    /// A required `data-*` attribute is absent.
    #[error("element is missing the data-{0} attribute")]
    MissingAttribute(&'static str),
    /// The attributes did not produce a complete configuration.
    #[error("incomplete slider configuration: {0}")]
    Config(#[from] SliderConfigBuilderError),
    /// The slider itself refused to build.
    #[error(transparent)]
    Slider(#[from] SliderError),
}
