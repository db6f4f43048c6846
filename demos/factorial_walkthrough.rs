//! Steps factorial(5) through every stage, printing each transition.
//!
//! Run with: `cargo run --example factorial_walkthrough`
//! Set `RUST_LOG=primtrace=debug` to watch the engine's internal logging.

use primtrace::{Stage, TraceEngine};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let mut engine = TraceEngine::with_builtins("factorial").expect("factorial is compiled in");

    println!("=== Factorial(5), one command at a time ===\n");

    engine.submit_inputs(&[5]).expect("5 is a valid input");
    println!(
        "[{}] inputs committed: {:?}",
        engine.state().stage,
        engine.state().inputs
    );

    engine.advance_to_ready().expect("inputs are complete");
    println!("[{}] evaluation requested", engine.state().stage);

    let state = engine.initialize().expect("engine is ready");
    println!("[{}] {}", state.stage, state.computation_label);

    while engine.state().stage != Stage::Terminated {
        let state = engine.iterate().expect("engine is iterating");
        println!("[{}] {}", state.stage, state.computation_label);
    }

    let state = engine.finalize().expect("a terminal state was reached");
    println!("[{}] {}", state.stage, state.computation_label);
    println!("\n{}", state.status_line());
}
