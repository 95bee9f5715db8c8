use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries the CSV export, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = sales_tracker::app::run(std::env::args_os()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
