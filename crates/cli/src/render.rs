use navkit_core::HostConfig;

pub fn run(config: HostConfig, component: &str) -> Result<(), Box<dyn std::error::Error>> {
    let host = navkit_runtime::build_default_host(config)?;
    let view = host.render_component(component)?;

    tracing::info!("Rendered {} from {} ({})", view.component, view.template, view.source);
    print!("{}", view.markup);
    Ok(())
}
