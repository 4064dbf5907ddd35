//! Generate-order-number command implementation

use crate::domain::{generate_order_number, ORDER_NUMBER_PREFIX};
use clap::Args;

/// Arguments for the generate-order-number command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Prefix for the generated numbers
    #[arg(long, default_value = ORDER_NUMBER_PREFIX)]
    pub prefix: String,

    /// How many numbers to print
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

impl GenerateArgs {
    /// Execute the generate-order-number command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let mut rng = rand::thread_rng();
        for _ in 0..self.count {
            println!("{}", generate_order_number(&self.prefix, &mut rng));
        }
        Ok(0)
    }
}
