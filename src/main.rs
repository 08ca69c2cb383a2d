use svc_meta::engine::RegistrationContext;
use svc_meta::logging;
use svc_meta::shared::config::CONFIG;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init(&CONFIG.logging)?;
    info!("svc_meta is starting...");

    let context = RegistrationContext::from_settings(&CONFIG)?;
    let self_name = context.self_identity().microservice_name().to_string();

    for pattern in &CONFIG.schema.patterns {
        context.register_schemas(pattern)?;
    }
    for path in &CONFIG.rest.base_paths {
        context.put_self_base_path_if_absent(&self_name, path)?;
    }

    let summary = context.summary();
    info!(
        microservices = summary.len(),
        schemas = summary.iter().map(|m| m.schemas.len()).sum::<usize>(),
        "Registration complete"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
