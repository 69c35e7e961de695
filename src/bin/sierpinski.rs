use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let command = sierpinski_chaos::RunGuiCommand::new(sierpinski_chaos::ChaosConfig::default());

    command
        .execute()
        .map_err(|err| anyhow::anyhow!("chaos game stopped: {err}"))?;

    Ok(())
}
