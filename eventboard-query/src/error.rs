use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no event with id {0}")]
    NotFound(u32),

    #[error("event ids are exhausted")]
    IdsExhausted,
}

pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError {
    pub fn invalid_argument<T, R>(msg: T) -> QueryResult<R>
    where
        T: Into<String>,
    {
        Err(QueryError::InvalidArgument(msg.into()))
    }
}
