use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValueError {
    #[error("Unsupported value type: {0}")]
    UnsupportedType(String),

    #[error("Unknown value type: {0}")]
    UnknownType(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Type error: {0}")]
    TypeError(String),

    #[error("Range error: {0}")]
    RangeError(String),
}

impl From<std::num::ParseIntError> for ValueError {
    fn from(err: std::num::ParseIntError) -> Self {
        ValueError::ParseError(format!("Integer parse error: {}", err))
    }
}
