//! The predictive function: a serde-loadable MLP weight file and a CPU
//! forward pass behind the [`Predictor`] trait.

mod mlp;
mod predictor;
mod weights;

pub use mlp::MlpRegressor;
pub use predictor::Predictor;
pub use weights::{LayerWeights, MlpWeights};
