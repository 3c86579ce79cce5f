use crate::activation::{sigmoid, sigmoid_derivative};
use crate::NeuronError;
use log::{debug, trace};
use rand::Rng;

/// Default learning rate for weight updates
pub const DEFAULT_ALPHA: f64 = 0.01;

/// Upstream gradient used by [`Neuron::step`]
pub const DEFAULT_FORWARD_GRAD: f64 = 1.0;

/// A single neuron with a sigmoid activation
///
/// Weights are stored bias first: `weights[0]` is the bias and
/// `weights[1..]` holds one weight per input.
#[derive(Clone, Debug)]
pub struct Neuron {
    num_inputs: usize,
    weights: Vec<f64>,
    /// Step size applied by `backprop`
    pub alpha: f64,
    inputs: Option<Vec<f64>>,
    output: Option<f64>,
    grads: Option<Vec<f64>>,
}

impl Neuron {
    /// Create a neuron with bias 0.0 and every input weight 1.0
    pub fn new(num_inputs: usize) -> Result<Self, NeuronError> {
        let weights = std::iter::once(0.0).chain(std::iter::repeat_n(1.0, num_inputs));
        Self::with_weights(num_inputs, weights)
    }

    /// Create a neuron from explicit weights, bias first
    pub fn with_weights<I, T>(num_inputs: usize, weights: I) -> Result<Self, NeuronError>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let weights: Vec<f64> = weights.into_iter().map(Into::into).collect();

        if num_inputs == 0 {
            return Err(NeuronError::NoInputs);
        }
        if weights.len() != num_inputs + 1 {
            return Err(NeuronError::WeightCount {
                expected: num_inputs + 1,
                actual: weights.len(),
            });
        }

        Ok(Neuron {
            num_inputs,
            weights,
            alpha: DEFAULT_ALPHA,
            inputs: None,
            output: None,
            grads: None,
        })
    }

    /// Create a neuron with weights drawn uniformly from [-1, 1)
    pub fn random<R: Rng>(num_inputs: usize, rng: &mut R) -> Result<Self, NeuronError> {
        let weights: Vec<f64> = (0..=num_inputs)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        Self::with_weights(num_inputs, weights)
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.weights[0]
    }

    pub fn input_weights(&self) -> &[f64] {
        &self.weights[1..]
    }

    /// Inputs of the last successful forward pass
    pub fn inputs(&self) -> Option<&[f64]> {
        self.inputs.as_deref()
    }

    /// Activation of the last successful forward pass
    pub fn output(&self) -> Option<f64> {
        self.output
    }

    /// Gradients of the last backward pass, aligned with `weights`
    pub fn grads(&self) -> Option<&[f64]> {
        self.grads.as_deref()
    }

    /// Weighted sum plus bias
    fn pre_activation(&self, inputs: &[f64]) -> f64 {
        self.bias()
            + self
                .input_weights()
                .iter()
                .zip(inputs)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    /// Forward pass: sigmoid(bias + sum of weighted inputs)
    ///
    /// Stores the inputs and the output on success. On a length mismatch
    /// nothing is modified.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<f64, NeuronError> {
        if inputs.len() != self.num_inputs {
            return Err(NeuronError::InputCount {
                expected: self.num_inputs,
                actual: inputs.len(),
            });
        }

        let z = self.pre_activation(inputs);
        let output = sigmoid(z);
        trace!("forward: z = {z}");
        debug!("forward: output = {output}");

        self.inputs = Some(inputs.to_vec());
        self.output = Some(output);
        Ok(output)
    }

    /// Local gradient of the output w.r.t. every weight, scaled by `forward_grad`
    fn compute_grads(&self, forward_grad: f64) -> Result<Vec<f64>, NeuronError> {
        let inputs = self.inputs.as_deref().ok_or(NeuronError::NoForwardPass)?;

        // Recomputed from the current weights, not taken from the cached output
        let ds = sigmoid_derivative(self.pre_activation(inputs));

        Ok(std::iter::once(1.0)
            .chain(inputs.iter().copied())
            .map(|x| forward_grad * x * ds)
            .collect())
    }

    /// Backward pass
    ///
    /// Returns `[d/d bias, d/d w1, d/d w2, ...]`, each multiplied by the
    /// upstream gradient `forward_grad`. Requires a prior `forward`.
    pub fn backward(&mut self, forward_grad: f64) -> Result<&[f64], NeuronError> {
        let grads = self.compute_grads(forward_grad)?;
        debug!("backward: grads = {grads:?}");
        Ok(self.grads.insert(grads).as_slice())
    }

    /// Backward pass followed by an in-place update `w += alpha * grad`
    ///
    /// The update adds the gradient, so with a positive `forward_grad` it
    /// climbs towards a larger output (gradient ascent). To descend on a loss,
    /// pass the negated loss gradient as `forward_grad`.
    pub fn backprop(&mut self, forward_grad: f64) -> Result<&[f64], NeuronError> {
        let grads = self.compute_grads(forward_grad)?;

        for (w, g) in self.weights.iter_mut().zip(&grads) {
            *w += self.alpha * g;
        }
        debug!("backprop: alpha = {}, weights = {:?}", self.alpha, self.weights);

        self.grads = Some(grads);
        Ok(&self.weights)
    }

    /// `backprop` with the default upstream gradient of 1
    pub fn step(&mut self) -> Result<&[f64], NeuronError> {
        self.backprop(DEFAULT_FORWARD_GRAD)
    }
}
