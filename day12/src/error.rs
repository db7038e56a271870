use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("line {line}: expected `<cave>-<cave>`, found {text:?}")]
    MalformedEdge { line: usize, text: String },

    #[error("the cave map never mentions the `{0}` cave")]
    MissingCave(&'static str),

    #[error("large caves {0} and {1} are connected, so there are infinitely many paths")]
    AdjacentLargeCaves(String, String),
}

pub type Result<T> = std::result::Result<T, Error>;
