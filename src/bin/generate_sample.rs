use chrono::{Duration, NaiveDate};

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

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let customers = [
        "Acme Corp",
        "Globex",
        "Initech",
        "Umbrella",
        "Stark Industries",
        "Wayne Enterprises",
        "Wonka Industries",
        "Tyrell Corp",
        "Cyberdyne",
        "Hooli",
    ];
    let regions = ["North", "South", "East", "West"];

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let days = 366; // 2024 is a leap year

    let output_path = "sales_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Date", "Customer", "Region", "Total"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for day in 0..days {
        let date = start + Duration::days(day);

        // 0–4 orders per day, busier mid-week.
        let weekday = (day % 7) as f64;
        let orders = rng.next_usize(3) + if (1.0..=4.0).contains(&weekday) { 2 } else { 0 };

        for _ in 0..orders {
            let customer = customers[rng.next_usize(customers.len())];
            let region = regions[rng.next_usize(regions.len())];
            // Lognormal-ish totals around a few hundred dollars.
            let total = rng.gauss(5.5, 0.6).exp().max(1.0);

            writer
                .write_record([
                    date.format("%Y-%m-%d").to_string(),
                    customer.to_string(),
                    region.to_string(),
                    format!("{total:.2}"),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush writer");
    println!("Wrote {rows} sales records ({days} days) to {output_path}");
}
