//! Runs every compiled-in algorithm to completion on sample inputs.
//!
//! Run with: `cargo run --example algorithm_gallery`

use std::sync::Arc;

use primtrace::{Stage, TraceEngine};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let mut engine = TraceEngine::with_builtins("factorial").expect("builtins are compiled in");
    let keys: Vec<String> = engine.registry().keys().map(str::to_string).collect();

    for key in keys {
        engine
            .change_algorithm(&key)
            .expect("key comes from the registry");
        let algorithm = Arc::clone(engine.active_algorithm());
        let inputs: Vec<i64> = match algorithm.arity() {
            2 => vec![2, 8],
            _ => vec![6],
        };

        println!("=== {} ({}) ===", algorithm.name(), key);
        for (label, value) in algorithm.input_labels().iter().zip(&inputs) {
            println!("  {}: {}", label, value);
        }

        engine.submit_inputs(&inputs).expect("sample inputs are valid");
        engine.advance_to_ready().expect("inputs are complete");
        let state = engine.initialize().expect("engine is ready");
        println!("  {}", state.computation_label);

        while engine.state().stage != Stage::Terminated {
            let state = engine.iterate().expect("engine is iterating");
            println!("  {}", state.computation_label);
        }

        let state = engine.finalize().expect("a terminal state was reached");
        println!("  {}", state.computation_label);
        println!("  => {}\n", state.status_line());
    }
}
