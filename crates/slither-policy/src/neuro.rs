//! The flat-parameter feed-forward policy.

use rand::Rng;
use slither_core::{Policy, PolicyError, SensorView, Steering, SENSOR_LEN};

/// Network output width: one logit per [`Steering`] command.
const OUTPUTS: usize = Steering::ALL.len();

/// A two-layer feed-forward network reading the sensor view.
///
/// All parameters live in one flat `f32` vector, laid out per layer as
/// a `(inputs + 1) x outputs` row-major matrix whose final row is the
/// bias. The hidden layer is ReLU, the output layer linear, and the
/// steering command is the argmax of the three output logits (first
/// index wins ties, so an all-zero network always steers left).
///
/// The flat layout is the persistence and optimization format: an
/// evolutionary search mutates the vector directly and never needs to
/// know the shape.
#[derive(Clone, Debug, PartialEq)]
pub struct NeuroPolicy {
    params: Vec<f32>,
    hidden: usize,
}

impl NeuroPolicy {
    /// Total parameter count for a network with `hidden` hidden units.
    pub const fn param_count(hidden: usize) -> usize {
        (SENSOR_LEN + 1) * hidden + (hidden + 1) * OUTPUTS
    }

    /// Build a policy from a flat parameter vector.
    ///
    /// # Errors
    ///
    /// [`PolicyError::EmptyLayer`] if `hidden` is zero, or
    /// [`PolicyError::ParamLength`] if `params.len()` does not match
    /// [`param_count`](Self::param_count).
    pub fn from_params(hidden: usize, params: Vec<f32>) -> Result<Self, PolicyError> {
        if hidden == 0 {
            return Err(PolicyError::EmptyLayer { name: "hidden" });
        }
        let expected = Self::param_count(hidden);
        if params.len() != expected {
            return Err(PolicyError::ParamLength {
                expected,
                got: params.len(),
            });
        }
        Ok(Self { params, hidden })
    }

    /// A policy with uniform random parameters in `[-1, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `hidden` is zero.
    pub fn random<R: Rng>(hidden: usize, rng: &mut R) -> Self {
        assert!(hidden > 0, "network needs at least one hidden unit");
        let params = (0..Self::param_count(hidden))
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();
        Self { params, hidden }
    }

    /// Number of hidden units.
    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// The flat parameter vector, in layout order.
    pub fn params(&self) -> &[f32] {
        &self.params
    }

    /// Run the forward pass and return the three output logits.
    pub fn forward(&self, input: &[f32; SENSOR_LEN]) -> [f32; OUTPUTS] {
        let h = self.hidden;
        let (layer1, layer2) = self.params.split_at((SENSOR_LEN + 1) * h);

        let mut hidden = vec![0.0_f32; h];
        for (j, unit) in hidden.iter_mut().enumerate() {
            let mut sum = layer1[SENSOR_LEN * h + j]; // bias row
            for (i, &x) in input.iter().enumerate() {
                sum += x * layer1[i * h + j];
            }
            *unit = sum.max(0.0);
        }

        let mut out = [0.0_f32; OUTPUTS];
        for (k, logit) in out.iter_mut().enumerate() {
            let mut sum = layer2[h * OUTPUTS + k]; // bias row
            for (j, &a) in hidden.iter().enumerate() {
                sum += a * layer2[j * OUTPUTS + k];
            }
            *logit = sum;
        }
        out
    }
}

impl Policy for NeuroPolicy {
    fn decide(&mut self, senses: &SensorView) -> Steering {
        let logits = self.forward(senses.as_array());
        let mut best = 0;
        for (k, &logit) in logits.iter().enumerate() {
            if logit > logits[best] {
                best = k;
            }
        }
        Steering::ALL[best]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn param_count_matches_layer_shapes() {
        // (16+1)*4 + (4+1)*3
        assert_eq!(NeuroPolicy::param_count(4), 68 + 15);
    }

    #[test]
    fn from_params_rejects_wrong_length() {
        let err = NeuroPolicy::from_params(4, vec![0.0; 10]).unwrap_err();
        assert_eq!(
            err,
            PolicyError::ParamLength {
                expected: NeuroPolicy::param_count(4),
                got: 10
            }
        );
    }

    #[test]
    fn from_params_rejects_zero_hidden() {
        let err = NeuroPolicy::from_params(0, Vec::new()).unwrap_err();
        assert_eq!(err, PolicyError::EmptyLayer { name: "hidden" });
    }

    #[test]
    fn random_has_the_right_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let policy = NeuroPolicy::random(6, &mut rng);
        assert_eq!(policy.params().len(), NeuroPolicy::param_count(6));
        assert!(policy.params().iter().all(|p| (-1.0..=1.0).contains(p)));
    }

    // ── Forward pass ────────────────────────────────────────────

    #[test]
    fn zero_network_steers_left() {
        let mut policy =
            NeuroPolicy::from_params(2, vec![0.0; NeuroPolicy::param_count(2)]).unwrap();
        assert_eq!(policy.decide(&SensorView::default()), Steering::Left);
    }

    #[test]
    fn output_bias_alone_picks_the_steering() {
        // Zero weights, output bias favoring index 2 (right).
        let hidden = 2;
        let mut params = vec![0.0; NeuroPolicy::param_count(hidden)];
        let bias_row = (SENSOR_LEN + 1) * hidden + hidden * OUTPUTS;
        params[bias_row + 2] = 1.0;
        let mut policy = NeuroPolicy::from_params(hidden, params).unwrap();
        assert_eq!(policy.decide(&SensorView::default()), Steering::Right);
    }

    #[test]
    fn relu_blocks_negative_hidden_activations() {
        // One hidden unit wired input0 -> hidden -> output1 with a
        // negative input weight: activation clamps to zero, so the
        // output stays at the tie-broken default.
        let hidden = 1;
        let mut params = vec![0.0; NeuroPolicy::param_count(hidden)];
        params[0] = -5.0; // input 0 -> hidden 0
        let layer2 = (SENSOR_LEN + 1) * hidden;
        params[layer2 + 1] = 1.0; // hidden 0 -> output 1
        let mut policy = NeuroPolicy::from_params(hidden, params).unwrap();

        let mut values = [0.0; SENSOR_LEN];
        values[0] = 1.0;
        assert_eq!(policy.decide(&SensorView::new(values)), Steering::Left);

        // Flip the weight positive and the signal reaches output 1.
        let mut params = vec![0.0; NeuroPolicy::param_count(hidden)];
        params[0] = 5.0;
        params[layer2 + 1] = 1.0;
        let mut policy = NeuroPolicy::from_params(hidden, params).unwrap();
        assert_eq!(policy.decide(&SensorView::new(values)), Steering::Straight);
    }

    #[test]
    fn decide_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let policy = NeuroPolicy::random(8, &mut rng);
        let mut a = policy.clone();
        let mut b = policy;
        let mut values = [0.0; SENSOR_LEN];
        values[3] = 1.0;
        values[10] = 1.0;
        let view = SensorView::new(values);
        assert_eq!(a.decide(&view), b.decide(&view));
    }
}
