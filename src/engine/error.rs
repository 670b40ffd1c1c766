use crate::core::tensor::TensorError;

#[derive(Debug)]
pub enum EngineError {
    ShapeMismatch(String),
    RankError(String),
    AxisOutOfBounds { axis: usize, rank: usize },
    DivisionByZero,
    NotBoolean(String),
    InvalidArgument(String),
    EmptyInput(String),
    Tensor(TensorError),
}

impl From<TensorError> for EngineError {
    fn from(e: TensorError) -> Self {
        EngineError::Tensor(e)
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            EngineError::RankError(msg) => write!(f, "Rank error: {}", msg),
            EngineError::AxisOutOfBounds { axis, rank } => {
                write!(f, "Axis {} out of bounds for rank-{} tensor", axis, rank)
            }
            EngineError::DivisionByZero => write!(f, "Division by zero in element-wise divide"),
            EngineError::NotBoolean(msg) => write!(f, "Expected boolean-valued tensor: {}", msg),
            EngineError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            EngineError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            EngineError::Tensor(e) => write!(f, "Tensor error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;
