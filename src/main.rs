use sleeptrack::commands::Cli;
use sleeptrack::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive("sleeptrack=debug".parse()?))
            .try_init();
    }

    Cli::menu().await
}
