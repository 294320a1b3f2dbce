use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::game::CELLS;

/// Parameters of one dense layer. `weights[i][j]` connects input `i` to
/// output `j` (the layout sklearn stores in `coefs_`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerWeights {
    pub weights: Vec<Vec<f32>>,
    pub biases: Vec<f32>,
}

/// On-disk MLP weight file. Hidden layers use ReLU; the final layer is
/// linear, producing raw regression scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlpWeights {
    pub layers: Vec<LayerWeights>,
}

impl MlpWeights {
    /// Load and validate a weight file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let weights: MlpWeights =
            serde_json::from_str(&content).map_err(|e| ModelError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        weights.validate()?;
        Ok(weights)
    }

    /// Check that the layer chain maps a 9-cell feature vector to 9 scores
    /// and that every layer's matrix is rectangular and matches its bias.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::Shape("model has no layers".to_string()));
        }

        let mut width = CELLS;
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.weights.len() != width {
                return Err(ModelError::Shape(format!(
                    "layer {} expects {} inputs, got {} weight rows",
                    index,
                    width,
                    layer.weights.len()
                )));
            }

            let outputs = layer.biases.len();
            if outputs == 0 {
                return Err(ModelError::Shape(format!("layer {} has no outputs", index)));
            }
            for (row_index, row) in layer.weights.iter().enumerate() {
                if row.len() != outputs {
                    return Err(ModelError::Shape(format!(
                        "layer {} row {} has {} columns, expected {}",
                        index,
                        row_index,
                        row.len(),
                        outputs
                    )));
                }
            }

            width = outputs;
        }

        if width != CELLS {
            return Err(ModelError::Shape(format!(
                "final layer produces {} scores, expected {}",
                width, CELLS
            )));
        }

        Ok(())
    }
}
