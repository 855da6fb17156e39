//! Main application entry point (native).
//!
//! Reads commands from stdin and applies them to an annotator backed by a
//! recording surface. An optional first argument names a JSON config file.

#[cfg(feature = "native")]
fn main() {
    use std::io::{self, BufRead};
    use textmark_app::Annotator;
    use textmark_app::script::Session;
    use textmark_core::AnnotatorConfig;
    use textmark_render::RecordingSurface;

    env_logger::init();
    log::info!("Starting textmark");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| AnnotatorConfig::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Failed to load config {path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => AnnotatorConfig::default(),
    };

    let mut session = Session::new(Annotator::with_config(RecordingSurface::new(), config));
    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {e}");
                break;
            }
        };
        match session.run_line(&line) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(e) => eprintln!("line {}: {e}", number + 1),
        }
        let drawn = session.annotator.surface_mut().take_commands();
        log::debug!("line {}: {} draw calls", number + 1, drawn.len());
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
