use brief_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("prompt too long: {len} characters (max {max})")]
    PromptTooLong { len: usize, max: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}
