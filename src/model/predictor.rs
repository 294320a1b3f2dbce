use crate::game::CELLS;

/// The predictive function behind the oracle agent: maps a 9-cell board
/// feature vector to one score per cell.
///
/// Implementations are read-only once constructed; a loaded model is shared
/// for the whole process lifetime. Injecting the trait rather than a concrete
/// model lets tests substitute deterministic stubs.
pub trait Predictor {
    fn predict(&self, features: &[f32; CELLS]) -> [f32; CELLS];
}
