mod application;
mod config;
mod form;
mod setup;

use std::io::Read;
use std::process::ExitCode;

use application::Application;
use config::Config;
use form::IssueForm;
use setup::set_up_tracing;

fn read_body(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn run(path: Option<&str>) -> std::io::Result<bool> {
    let body = read_body(path)?;
    let form = IssueForm::parse(&body);
    tracing::info!(sections = form.len(), "validating application");

    match Application::from_form(&form) {
        Ok(application) => {
            let json = serde_json::to_string_pretty(&application)?;
            println!("{json}");
            tracing::info!("application is valid");
            Ok(true)
        }
        Err(errors) => {
            for error in &errors {
                println!("{error}");
            }
            tracing::warn!(errors = errors.len(), "application is invalid");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    set_up_tracing(&config);

    let path = std::env::args().nth(1);
    match run(path.as_deref()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "failed to read issue body");
            ExitCode::from(2)
        }
    }
}
