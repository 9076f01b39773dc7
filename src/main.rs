//! OneMax GA CLI - run the evolutionary loop with the default parameters.

use onemax_ga::ga::{GaConfig, GaRunner, OneMax};

fn main() {
    env_logger::init();

    let runner = GaRunner::new(GaConfig::default(), OneMax).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = runner
        .run_with(|stats| println!("{stats}"))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    println!("{result}");
}
