//! Evolves random lowercase words towards a target word.
//!
//! ```text
//! RUST_LOG=info cargo run --example string_target -- renquinn
//! ```

#[path = "word.rs"]
mod word;

use goga::ga::{Goga, GogaConfig};
use goga::random::create_rng;
use goga::GogaError;
use word::Member;

fn main() -> Result<(), GogaError> {
    env_logger::init();

    let target = std::env::args().nth(1).unwrap_or_else(|| "renquinn".into());
    let mut rng = create_rng(rand::random());

    let mut goga = Goga::init(|value: String| Member::new(value))
        .with_config(GogaConfig::default().with_num_threads(16));
    let population = goga.generate_population(100, || Member::random(target.len(), &mut rng));

    goga.run(&Member::new(target), population)?;

    if let Some(best) = goga.result() {
        println!("{best}");
    }
    if let Some(status) = goga.status() {
        println!("{status}");
    }
    Ok(())
}
