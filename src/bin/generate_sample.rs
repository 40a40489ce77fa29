use serde::Serialize;

#[derive(Serialize)]
struct Record {
    label: String,
    values: Vec<f64>,
}

/// 3x3 pixel glyphs used as clean input patterns.
const GLYPHS: [(&str, [f64; 9]); 4] = [
    ("cross", [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]),
    ("plus", [0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0]),
    ("ring", [1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
    ("bar", [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]),
];

/// Seeded splitmix64 stream; enough noise for a demo file.
struct Noise(u64);

impl Noise {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Zero-mean normal sample (Box-Muller, sine branch).
    fn normal(&mut self, std_dev: f64) -> f64 {
        let radius = (-2.0 * (1.0 - self.next_unit()).ln()).sqrt();
        let angle = std::f64::consts::TAU * self.next_unit();
        std_dev * radius * angle.sin()
    }
}

fn main() {
    let mut noise = Noise(42);
    let noise_levels = [0.05, 0.2];

    let mut records = Vec::new();
    for (name, pixels) in &GLYPHS {
        for (variant, &level) in noise_levels.iter().enumerate() {
            let values = pixels
                .iter()
                .map(|&p| p + noise.normal(level))
                .collect();
            records.push(Record {
                label: format!("{name}-{}", variant + 1),
                values,
            });
        }
    }

    let output_path = "sample_patterns.json";
    let json = serde_json::to_string_pretty(&records).expect("Failed to serialize patterns");
    std::fs::write(output_path, json).expect("Failed to write output file");

    println!(
        "Wrote {} patterns ({} values each) to {output_path}",
        records.len(),
        GLYPHS[0].1.len()
    );
}
