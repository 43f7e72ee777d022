use thiserror::Error;

#[derive(Debug, Error)]
pub enum HellModemError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Glyph table is empty")]
    EmptyGlyphTable,

    #[error("Glyph for {codepoint:?} has {got} columns, table requires {want}")]
    InvalidGlyphGeometry {
        codepoint: char,
        got: usize,
        want: usize,
    },
}

pub type Result<T> = std::result::Result<T, HellModemError>;
