use clap::Parser;
use student_records::utils::error::ErrorSeverity;
use student_records::utils::{logger, validation::Validate};
use student_records::{
    CliConfig, DemoRoster, RecordsError, RosterConfig, RosterSource, Snapshot,
    StudentManagementSystem,
};

fn load(config: &CliConfig) -> Result<StudentManagementSystem, RecordsError> {
    let mut system = StudentManagementSystem::new();
    match &config.roster {
        Some(path) => {
            tracing::info!("Loading roster from: {}", path);
            let roster = RosterConfig::from_file(path)?;
            roster.validate()?;
            roster.populate(&mut system)?;
        }
        None => DemoRoster.populate(&mut system)?,
    }
    Ok(system)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let result = config
        .validate()
        .and_then(|_| load(&config))
        .and_then(|system| Snapshot::capture(&system).render(config.format));

    match result {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}
