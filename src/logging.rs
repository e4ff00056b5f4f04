use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Routes log events to stderr so stdout carries nothing but the maze.
///
/// The returned guard flushes pending events when dropped and must be held
/// until the program exits.
pub fn init(verbosity: u8) -> WorkerGuard {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_target(false)
        .init();
    guard
}
