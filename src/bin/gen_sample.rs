//! Writes a synthetic 4-state trajectory table in the simulator's text
//! format, for exercising the plotter without a real run.
use std::error::Error;
use std::fmt::Write as _;
use std::fs::write;

use rand::{Rng, SeedableRng, rngs::StdRng};

const N_STEPS: usize = 400;
const T_MAX: f64 = 10.0;
const PULSE_CENTER: f64 = 5.0;
const PULSE_SIGMA: f64 = 1.5;
const LEAKAGE: f64 = 0.05;
const SEED: u64 = 0x51_7A_4A;

fn gaussian_envelope(t: f64) -> f64 {
    (-(t - PULSE_CENTER).powi(2) / (2.0 * PULSE_SIGMA * PULSE_SIGMA)).exp()
}

fn format_complex(re: f64, im: f64) -> String {
    if im < 0.0 {
        format!("{re:.6}{im:.6}j")
    } else {
        format!("{re:.6}+{im:.6}j")
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let prefix = std::env::args().nth(1).unwrap_or_else(|| "sample".to_string());
    let path = format!("{prefix}.txt");

    let mut rng = StdRng::seed_from_u64(SEED);
    let detunings: [f64; 2] = [rng.random_range(-0.1..0.1), rng.random_range(-0.1..0.1)];

    let dt = T_MAX / (N_STEPS - 1) as f64;
    let mut pulse_area = 0.0f64;
    let mut out = String::new();
    for step in 0..N_STEPS {
        let t = step as f64 * dt;
        let env = gaussian_envelope(t);
        pulse_area += env * dt;

        // Driven two-level rotation between |0> and |1>, with a small
        // detuned leak into |2> and |3>.
        let half = pulse_area / 2.0;
        let leak = LEAKAGE * half.sin();
        let c0 = (half.cos(), 0.0);
        let c1 = (0.0, -half.sin());
        let c2 = (
            leak * (detunings[0] * t).cos(),
            leak * (detunings[0] * t).sin(),
        );
        let c3 = (
            leak * (detunings[1] * t).cos(),
            -leak * (detunings[1] * t).sin(),
        );

        write!(out, "{t:.6} {env:.6}")?;
        for (re, im) in [c0, c1, c2, c3] {
            write!(out, " {}", format_complex(re, im))?;
        }
        out.push('\n');
    }

    write(&path, out)?;
    println!("Wrote {N_STEPS} steps to {path}");
    Ok(())
}
