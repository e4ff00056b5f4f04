use std::time::Instant;

use eller_maze::{app::App, config::Config};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let mut next_number = |default: usize| {
        args.next()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(default)
    };
    let width = next_number(1000);
    let height = next_number(1000);
    let num_iters = next_number(10);

    let config = Config::new(width, height)?;
    let start = Instant::now();
    for iter in 0..num_iters {
        let app = App::new(config.clone().with_seed(Some(iter as u64)));
        app.run(&mut std::io::sink())?;
    }
    let elapsed = start.elapsed();
    println!(
        "Generated {} maze(s) of {}x{} in {:?} ({:.6}s per maze)",
        num_iters,
        width,
        height,
        elapsed,
        elapsed.as_secs_f64() / num_iters.max(1) as f64
    );
    Ok(())
}
