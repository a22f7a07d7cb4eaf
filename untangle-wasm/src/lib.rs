use rand::rngs::SmallRng;
use untangle::PuzzleConfig;
use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logging;

#[wasm_bindgen]
pub struct Puzzle {
    pub(crate) inner: untangle::Puzzle,
    pub(crate) config: PuzzleConfig,
    // Drives restart()
    pub(crate) rng: SmallRng,
}

impl Puzzle {
    pub fn rs_new(seed: u64, config: PuzzleConfig) -> Result<Puzzle, untangle::PuzzleError> {
        let mut rng = untangle::seeded(seed);
        let inner = untangle::Puzzle::new(&config, &mut rng)?;
        Ok(Puzzle { inner, config, rng })
    }
    pub fn rs_inner(&self) -> &untangle::Puzzle { &self.inner }
}
