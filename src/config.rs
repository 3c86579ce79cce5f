use crate::neuron::DEFAULT_ALPHA;
use crate::{Neuron, NeuronError};

/// Builder-style description of a neuron
///
/// ```
/// use sigmoid_neuron::NeuronConfig;
///
/// let neuron = NeuronConfig::new(2)
///     .weights(vec![0.5, -1.0, 1.0])
///     .alpha(0.1)
///     .build()
///     .unwrap();
/// assert_eq!(neuron.bias(), 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NeuronConfig {
    pub num_inputs: usize,
    /// Initial weights, bias first. Defaults to bias 0.0 and input weights 1.0.
    pub weights: Option<Vec<f64>>,
    pub alpha: f64,
}

impl NeuronConfig {
    pub fn new(num_inputs: usize) -> Self {
        NeuronConfig {
            num_inputs,
            weights: None,
            alpha: DEFAULT_ALPHA,
        }
    }

    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validate the configuration and construct the neuron
    pub fn build(self) -> Result<Neuron, NeuronError> {
        let mut neuron = match self.weights {
            Some(weights) => Neuron::with_weights(self.num_inputs, weights)?,
            None => Neuron::new(self.num_inputs)?,
        };
        neuron.alpha = self.alpha;
        Ok(neuron)
    }
}
