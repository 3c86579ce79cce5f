use log::info;
use sigmoid_neuron::{Neuron, NeuronConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("sigmoid-neuron {}", sigmoid_neuron::VERSION);

    // Two inputs, default weights: bias 0.0, input weights 1.0
    let mut neuron = Neuron::new(2)?;
    let input = [1.0, 1.0];

    println!("Initial weights: {:?}", neuron.weights());

    let output = neuron.forward(&input)?;
    println!("Forward {:?} -> {}", input, output);

    let grads = neuron.backward(1.0)?;
    println!("Backward(1.0) grads: {:?}", grads);

    let weights = neuron.step()?;
    println!("Weights after one step (alpha = 0.01): {:?}", weights);

    // backprop adds alpha * grad, so repeated steps push the output up
    let mut neuron = NeuronConfig::new(3)
        .weights(vec![-1.0, 0.5, -0.5, 0.25])
        .alpha(0.5)
        .build()?;
    let input = [0.2, 0.4, 0.8];

    println!("\nRepeated steps with alpha = {}:", neuron.alpha);
    for i in 0..5 {
        let output = neuron.forward(&input)?;
        println!("Step {}: output = {:.6}", i, output);
        neuron.step()?;
    }
    println!("Final weights: {:?}", neuron.weights());

    // Invalid calls come back as errors
    if let Err(err) = neuron.forward(&[1.0]) {
        println!("\nRejected input: {} ({:?})", err, err.kind());
    }

    Ok(())
}
