use std::fmt;

/// Broad category of a [`NeuronError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The neuron could not be constructed.
    Validation,
    /// A call received arguments of the wrong shape.
    Argument,
    /// An operation was called in the wrong order.
    State,
}

/// All errors a neuron can return.
#[derive(Debug, Clone, PartialEq)]
pub enum NeuronError {
    /// Zero inputs requested at construction.
    NoInputs,
    /// Initial weights do not have one entry per input plus the bias.
    WeightCount { expected: usize, actual: usize },
    /// `forward` received the wrong number of inputs.
    InputCount { expected: usize, actual: usize },
    /// `backward` or `backprop` ran before any `forward`.
    NoForwardPass,
}

impl NeuronError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoInputs | Self::WeightCount { .. } => ErrorKind::Validation,
            Self::InputCount { .. } => ErrorKind::Argument,
            Self::NoForwardPass => ErrorKind::State,
        }
    }
}

impl fmt::Display for NeuronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInputs => write!(f, "num inputs must be positive"),
            Self::WeightCount { expected, actual } => write!(
                f,
                "weights must be length num_inputs + 1 (first weight is bias weight): \
                 got {actual}, expected {expected}"
            ),
            Self::InputCount { expected, actual } => {
                write!(f, "wrong number of inputs ({actual} for {expected})")
            }
            Self::NoForwardPass => {
                write!(f, "forward must be called before backward/backprop")
            }
        }
    }
}

impl std::error::Error for NeuronError {}
