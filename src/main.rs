use clap::Parser;
use postdeck::cli::Cli;
use postdeck::logging::init_tracing;
use postdeck::ui::runtime;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    tracing::info!(posts_url = %config.posts.url, path = %cli.path, "starting postdeck");

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("postdeck-worker")
        .build()?;

    runtime::run(config, &cli.path, tokio_runtime.handle())?;
    tokio_runtime.shutdown_timeout(std::time::Duration::from_millis(200));
    Ok(())
}
