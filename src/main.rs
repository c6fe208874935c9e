use std::io;
use std::process::ExitCode;

use TwoStackQueueMini::Result;
use TwoStackQueueMini::core::config::Config;
use TwoStackQueueMini::core::log::append_logs;
use TwoStackQueueMini::core::session::Session;

fn run() -> Result<()> {
    let config = Config::from_env()?;
    let mut session = Session::new();

    let stdout = io::stdout();
    let applied = session.run(io::stdin().lock(), stdout.lock())?;
    log::info!(
        "applied {applied} operations, {} items moved between stacks",
        session.queue().moves()
    );

    // Append the operation log as NDJSON
    if let Some(path) = &config.trace {
        append_logs(session.logs(), path)?;
        log::info!("wrote {} log entries to {}", session.logs().len(), path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
