//! HomeSolution demo
//!
//! Runs a small renovation through the engine and prints the project detail.

use hs_core::config::{AppConfig, LogFormat, LoggingConfig};
use hs_core::{HsResult, Id};
use hs_models::{NewProject, NewTask};
use hs_services::SharedEngine;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(&config.logging);
    if let Err(e) = &loaded {
        tracing::warn!("Failed to load configuration: {}, using defaults", e);
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        auto_finalize = config.engine.auto_finalize_on_last_task,
        "Starting HomeSolution walkthrough"
    );

    let engine = SharedEngine::from_config(&config);
    let project = run_walkthrough(&engine).inspect_err(|e| {
        tracing::error!(code = e.error_code(), "Walkthrough failed: {}", e);
    })?;

    let mut engine = engine.lock();
    println!("{}", engine.project_detail(project));
    println!();

    for summary in engine.finished_projects() {
        println!(
            "Finished: #{} {} ({}) cost {:.2}",
            summary.number,
            summary.address,
            summary.client,
            engine.project_cost(summary.number)
        );
    }
    for (id, name) in engine.employees() {
        println!(
            "Employee {} {}: {} delay(s)",
            id,
            name,
            engine.employee_delay_count(id)
        );
    }
    if let Some((title, days)) = engine.longest_task() {
        println!("Longest task: {} ({} days)", title, days);
    }

    // finalizing again reports the stored cost
    let cost = engine.finalize_project_now(project)?;
    info!(project, cost, "Walkthrough complete");
    Ok(())
}

fn run_walkthrough(engine: &SharedEngine) -> HsResult<Id> {
    engine.with(|engine| {
        let ana = engine.register_employee("Ana Gómez", 20.0)?;
        let luis = engine.register_staff_employee("Luis Pérez", 150.0, "Senior")?;
        let _marta = engine.register_employee("Marta Ruiz", 18.5)?;

        let project = engine.register_project(
            NewProject::builder("Evergreen Terrace 742", "2024-01-01")
                .with_client("Marge Simpson", "marge@example.com", "555-0101")
                .with_task("Paint living room", "Two coats, white", 2.0)
                .with_task("Fix kitchen tap", "", 0.5)
                .with_task("Replace tiles", "Bathroom floor", 1.5),
        )?;
        engine.add_task_to_project(
            project,
            NewTask::new("Clean up", Some("Remove debris".to_string()), 1.0),
        )?;

        engine.assign_first_available(project, "Paint living room")?;
        engine.assign_least_delayed(project, "Fix kitchen tap")?;
        engine.assign_first_available(project, "Replace tiles")?;

        engine.record_delay(project, "Replace tiles", 1.0)?;
        engine.finish_task(project, "Fix kitchen tap")?;
        engine.reassign_least_delayed(project, "Replace tiles")?;

        for title in ["Paint living room", "Replace tiles"] {
            engine.finish_task(project, title)?;
        }
        engine.assign_least_delayed(project, "Clean up")?;
        engine.finish_task(project, "Clean up")?;

        if !engine.is_finalized(project) {
            engine.finalize_project(project, "2024-01-09")?;
        }

        info!(ana, luis, project, "Scripted renovation done");
        Ok(project)
    })
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
    }
}
