use thiserror::Error;

/// Errors raised while building a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// The requested vertex count, bounds, configuration or edge list is malformed.
	#[error("Invalid input: {0}")]
	InvalidInput(String),
}

impl GraphError {
	/// Creates an invalid input error.
	pub fn invalid_input(message: impl Into<String>) -> Self {
		GraphError::InvalidInput(message.into())
	}
}
