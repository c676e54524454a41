use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed song {song}: {reason}")]
    MalformedSong { song: String, reason: String },

    #[error("Collection contains no songs")]
    EmptyCollection,

    #[error("No data: {0}")]
    NoData(&'static str),

    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed(song: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedSong {
            song: song.into(),
            reason: reason.into(),
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        let message = match e {
            DrawingAreaErrorKind::BackendError(inner) => format!("backend: {}", inner),
            DrawingAreaErrorKind::SharingError => "drawing area is shared".to_string(),
            DrawingAreaErrorKind::LayoutError => "invalid layout".to_string(),
        };
        Error::Render(message)
    }
}
