//! Writes a deterministic sample `cleaned_car_data.csv` for trying out the
//! dashboard without the real dataset. Fuel spellings are intentionally
//! mixed-case and a few LPG rows are included so the loader's normalization
//! and row-dropping are visible.

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (brand, base price in euro)
    let brands: [(&str, f64); 8] = [
        ("audi", 28_000.0),
        ("bmw", 32_000.0),
        ("dacia", 11_000.0),
        ("ford", 16_000.0),
        ("mercedes-benz", 35_000.0),
        ("renault", 13_000.0),
        ("skoda", 18_000.0),
        ("volkswagen", 21_000.0),
    ];
    // Mixed spellings on purpose; the loader capitalizes them into one
    // category each. LPG is outside the valid set and gets dropped.
    let fuels = [
        "Petrol", "petrol", "PETROL", "Diesel", "diesel", "Hybrid", "Electric", "LPG",
    ];
    let transmissions = ["Manual", "Automatic", "Semi-automatic"];
    let colors = ["black", "white", "grey", "blue", "red", "silver", "green"];

    let output_path = "data/cleaned_car_data.csv";
    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "",
            "brand",
            "fuel_type",
            "transmission_type",
            "color",
            "price_in_euro",
            "year",
        ])
        .expect("Failed to write header");

    let n_rows = 2_000;
    for i in 0..n_rows {
        let (brand, base_price) = rng.pick(&brands);
        let fuel = rng.pick(&fuels);
        let transmission = rng.pick(&transmissions);
        let color = rng.pick(&colors);

        let year = 2005 + (rng.next_u64() % 19) as i32;
        let age_discount = (2023 - year) as f64 * 0.05;
        let price = (rng.gauss(*base_price, base_price * 0.2) * (1.0 - age_discount))
            .max(1_500.0);

        writer
            .write_record([
                i.to_string(),
                brand.to_string(),
                fuel.to_string(),
                transmission.to_string(),
                color.to_string(),
                format!("{price:.1}"),
                year.to_string(),
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {n_rows} listings to {output_path}");
}
