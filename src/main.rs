use clap::Parser;
use contact_sync::config::load_env_file;
use contact_sync::utils::logger;
use contact_sync::{CliArgs, ContactSyncPipeline, SubmitOutcome, SyncConfig, SyncEngine, SyncError};

fn fail(e: &SyncError) -> ! {
    tracing::error!("❌ Contact sync failed: {} (Stage: {:?})", e, e.stage());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting contact-sync");

    // configuration is resolved before any network activity
    if let Err(e) = load_env_file(args.env_file.as_deref()) {
        fail(&e);
    }
    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Config: {:?}", config);

    let engine = SyncEngine::new(ContactSyncPipeline::new(config));

    match engine.run().await {
        Ok(report) => {
            match report.outcome.response_len() {
                Some(len) => println!(
                    "✅ Contacts created/updated in HubSpot. {} contacts submitted, response length {}.",
                    report.submitted, len
                ),
                None => println!(
                    "✅ Contacts created/updated in HubSpot. {} contacts submitted.",
                    report.submitted
                ),
            }
            if let SubmitOutcome::Created { response } = &report.outcome {
                println!("{}", response);
            }
        }
        Err(e) => fail(&e),
    }
}
