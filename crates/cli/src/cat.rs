use navkit_core::HostConfig;
use std::io::Write;

pub fn run(config: HostConfig, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let host = navkit_runtime::build_default_host(config)?;
    let asset = host
        .resolve_static(path)
        .ok_or_else(|| format!("Not found: {}", path))?;

    tracing::info!(
        "{} served by {} at {} ({})",
        path,
        asset.source,
        asset.mount,
        asset.content_type
    );
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&asset.file.contents)?;
    stdout.flush()?;
    Ok(())
}
