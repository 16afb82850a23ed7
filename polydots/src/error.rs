use thiserror::Error;

/// Failure while reading a path `d` attribute. Offsets are byte positions
/// of the command that failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unsupported path command '{command}' at offset {offset}")]
    UnsupportedCommand { command: char, offset: usize },
    #[error("command '{command}' at offset {offset} takes coordinate pairs, got {got} numbers")]
    ArgumentCount { command: char, offset: usize, got: usize },
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
    #[error("malformed number at offset {offset}")]
    InvalidNumber { offset: usize },
    #[error("coordinate out of range at offset {offset}")]
    CoordinateOutOfRange { offset: usize },
    #[error("command '{command}' at offset {offset} appears before any moveto")]
    MissingMoveTo { command: char, offset: usize },
    #[error("path data exceeds limit: {0}")]
    TooLarge(&'static str),
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::TooLarge(_) => "too_large",
            _ => "parse_error",
        }
    }
}

/// Failure while turning an SVG document into a puzzle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("invalid svg: {0}")]
    InvalidSvg(String),
    #[error("document contains no drawable paths")]
    NoPaths,
    #[error("path #{index}{}: {source}", id_suffix(.id))]
    Path {
        index: usize,
        id: Option<String>,
        #[source]
        source: ParseError,
    },
    #[error("document exceeds limit: {0}")]
    TooLarge(&'static str),
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::InvalidSvg(_) => "invalid_svg",
            LoadError::NoPaths => "no_paths",
            LoadError::Path { source, .. } => source.code(),
            LoadError::TooLarge(_) => "too_large",
        }
    }
}

fn id_suffix(id: &Option<String>) -> String {
    id.as_deref().map(|s| format!(" ({s})")).unwrap_or_default()
}
