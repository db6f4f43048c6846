//! Scrubs an evaluation backward and forward through its history.
//!
//! Run with: `cargo run --example undo_redo`

use primtrace::TraceEngine;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn describe(engine: &TraceEngine) -> String {
    let state = engine.state();
    format!(
        "stage {:<11} iterations {} (history {}, redo {})",
        state.stage.to_string(),
        state.iterations(),
        engine.history().len(),
        engine.history().redo_depth()
    )
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let mut engine = TraceEngine::with_builtins("sum").expect("sum is compiled in");

    engine.submit_inputs(&[4]).expect("4 is a valid input");
    engine.advance_to_ready().expect("inputs are complete");
    engine.initialize().expect("engine is ready");
    engine.iterate().expect("engine is iterating");
    engine.iterate().expect("engine is iterating");
    println!("after five commands : {}", describe(&engine));

    engine.undo().expect("there are snapshots to undo");
    engine.undo().expect("there are snapshots to undo");
    println!("after two undos     : {}", describe(&engine));

    engine.redo().expect("there are snapshots to redo");
    println!("after one redo      : {}", describe(&engine));

    // Taking a new action discards the undone future.
    engine.iterate().expect("engine is iterating");
    println!("after a fresh step  : {}", describe(&engine));

    match engine.redo() {
        Err(error) => println!("redo now fails      : {}", error),
        Ok(_) => unreachable!("the redo stack was discarded"),
    }
}
