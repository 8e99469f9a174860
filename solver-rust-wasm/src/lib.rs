use wasm_bindgen::prelude::*;
use solver_core::{HeatConfig, HeatSolver};

#[wasm_bindgen]
pub struct Solver {
    inner: HeatSolver,
}

#[wasm_bindgen]
impl Solver {
    #[wasm_bindgen(constructor)]
    pub fn new(n: i32, nsteps: i32) -> Result<Solver, JsValue> {
        let config = HeatConfig::new(n.into(), nsteps.into())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Solver { inner: HeatSolver::new(config) })
    }

    pub fn with_constants(n: i32, nsteps: i32, alpha: f64, length: f64) -> Result<Solver, JsValue> {
        let config = HeatConfig::with_constants(n.into(), nsteps.into(), alpha, length)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Solver { inner: HeatSolver::new(config) })
    }

    pub fn n(&self) -> usize { self.inner.config().n() }
    pub fn get_dx(&self) -> f64 { self.inner.config().dx() }
    pub fn get_dt(&self) -> f64 { self.inner.config().dt() }
    pub fn get_r(&self) -> f64 { self.inner.config().r() }
    pub fn is_stable(&self) -> bool { self.inner.config().is_stable() }

    pub fn time(&self) -> f64 { self.inner.time() }
    pub fn steps_taken(&self) -> usize { self.inner.steps_taken() }

    pub fn reset(&mut self) { self.inner.reset(); }

    // Copy-based JS access (reliable)
    pub fn get_field(&self) -> Vec<f64> {
        self.inner.field().as_slice().to_vec()
    }

    pub fn l2_norm(&self) -> f64 { self.inner.l2_norm() }

    // Step + timing (WASM-only)
    pub fn step(&mut self) -> StepInfo {
        let t0 = now_ms();
        self.inner.step();
        let t1 = now_ms();
        StepInfo { steps: 1, compute_ms: t1 - t0, time: self.inner.time() }
    }
    pub fn run(&mut self) -> StepInfo {
        let t0 = now_ms();
        let steps = self.inner.run();
        let t1 = now_ms();
        StepInfo { steps, compute_ms: t1 - t0, time: self.inner.time() }
    }
}

#[wasm_bindgen]
pub struct StepInfo {
    steps: usize,
    compute_ms: f64,
    time: f64,
}

#[wasm_bindgen]
impl StepInfo {
    pub fn steps(&self) -> usize { self.steps }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    pub fn time(&self) -> f64 { self.time }
}


fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
