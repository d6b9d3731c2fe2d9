//! Writes a synthetic stats triple the viewer can open:
//! `psr-sample.txt`, `pfm-sample.txt`, `vel-sample.txt`.
//!
//! The distribution is the classic boxplot demo shape: a uniform spread,
//! a centre pinned at 50, and deliberate high and low fliers.

use std::io::Write;
use std::path::Path;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// 50 spread values, 25 pinned at the centre, 10 high and 10 low fliers.
fn demo_series(rng: &mut SimpleRng) -> Vec<f64> {
    let mut values = Vec::with_capacity(95);
    values.extend((0..50).map(|_| rng.next_f64() * 100.0));
    values.extend(std::iter::repeat(50.0).take(25));
    values.extend((0..10).map(|_| rng.next_f64() * 100.0 + 100.0));
    values.extend((0..10).map(|_| rng.next_f64() * -100.0));
    values
}

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "../build/particlestats".to_string());
    let out_dir = Path::new(&out_dir);
    std::fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let mut rng = SimpleRng::new(42);
    let run_id = "sample";

    for prefix in ["psr", "pfm", "vel"] {
        let path = out_dir.join(format!("{prefix}-{run_id}.txt"));
        let series = demo_series(&mut rng);

        let mut file = std::fs::File::create(&path).expect("Failed to create output file");
        for v in &series {
            writeln!(file, "{v}").expect("Failed to write value");
        }

        println!("Wrote {} values to {}", series.len(), path.display());
    }
}
