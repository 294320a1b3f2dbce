use std::path::Path;

use ndarray::{Array1, Array2};

use crate::error::ModelError;
use crate::game::CELLS;

use super::predictor::Predictor;
use super::weights::MlpWeights;

struct DenseLayer {
    weights: Array2<f32>,
    biases: Array1<f32>,
}

/// A feed-forward MLP regressor over board features.
///
/// ```text
/// Input:   [9]  board features (X=1, O=-1, empty=0)
/// Hidden:  dense + ReLU, per weight-file layer
/// Output:  [9]  one raw score per cell
/// ```
pub struct MlpRegressor {
    layers: Vec<DenseLayer>,
}

impl MlpRegressor {
    /// Build a regressor from validated weights.
    pub fn from_weights(weights: &MlpWeights) -> Result<Self, ModelError> {
        weights.validate()?;

        let mut layers = Vec::with_capacity(weights.layers.len());
        for layer in &weights.layers {
            let rows = layer.weights.len();
            let cols = layer.biases.len();
            let flat: Vec<f32> = layer.weights.iter().flatten().copied().collect();
            let weights = Array2::from_shape_vec((rows, cols), flat)
                .map_err(|e| ModelError::Shape(e.to_string()))?;
            let biases = Array1::from_vec(layer.biases.clone());
            layers.push(DenseLayer { weights, biases });
        }

        Ok(MlpRegressor { layers })
    }

    /// Load a regressor from a JSON weight file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        Self::from_weights(&MlpWeights::load(path)?)
    }
}

impl Predictor for MlpRegressor {
    /// Forward pass: x -> W^T x + b per layer, ReLU on all but the last.
    fn predict(&self, features: &[f32; CELLS]) -> [f32; CELLS] {
        let mut x = Array1::from_vec(features.to_vec());
        let last = self.layers.len() - 1;

        for (index, layer) in self.layers.iter().enumerate() {
            x = layer.weights.t().dot(&x) + &layer.biases;
            if index < last {
                x.mapv_inplace(|v| v.max(0.0));
            }
        }

        let mut scores = [0.0f32; CELLS];
        for (slot, value) in scores.iter_mut().zip(x.iter()) {
            *slot = *value;
        }
        scores
    }
}
