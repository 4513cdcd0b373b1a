mod cli_arguments;

use std::{process::ExitCode, time::Duration};

use clap::Parser;
use http_instant::{
    ExecutorConfig, HttpRequest, RequestBody, RequestExecutor, RequestOptions, ResponseTarget,
};
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::CliArguments;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Request(#[from] http_instant::Error),
}

fn executor_config(args: &CliArguments) -> ExecutorConfig {
    let mut config = ExecutorConfig::from_env();
    config.debug |= args.debug;
    config.mock_mode |= args.mock;
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout = Duration::from_millis(timeout_ms);
    }
    config
}

fn request_options(args: &CliArguments) -> Result<RequestOptions, CliError> {
    let mut options = RequestOptions::new(args.method.clone(), args.url.clone())
        .content_type(args.content_type.clone());

    for (name, value) in &args.headers {
        options = options.header(name.clone(), value.clone());
    }

    if let Some((username, password)) = &args.user {
        options = options.basic_auth(username.clone(), password.clone());
    }

    if let Some(data) = &args.data {
        options = if args.json {
            let value: serde_json::Value = serde_json::from_str(data)?;
            options.body(RequestBody::structured_with_xml_root(
                value,
                args.xml_root.clone(),
            ))
        } else {
            options.body(data.clone())
        };
    }

    Ok(options)
}

/// Mock mode never decodes, so its canned body is printed raw instead.
fn decodes_output(args: &CliArguments, config: &ExecutorConfig) -> bool {
    args.decode && !config.mock_mode
}

async fn run(args: CliArguments) -> Result<(), CliError> {
    let executor = RequestExecutor::from_config(executor_config(&args))?;
    let options = request_options(&args)?;
    let decode = decodes_output(&args, executor.config());

    let mut decoded = serde_json::Value::Null;
    let target = if decode {
        Some(&mut decoded as &mut (dyn ResponseTarget + Send))
    } else {
        None
    };

    let response = executor.execute(options, target).await?;

    println!("HTTP {}", response.status);
    let mut names: Vec<&String> = response.headers.keys().collect();
    names.sort();
    for name in names {
        for value in response.headers.get_all(name) {
            println!("{}: {}", name, value);
        }
    }
    println!();

    if decode {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        println!("{}", String::from_utf8_lossy(&response.body));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Request failed: {err}");
            ExitCode::FAILURE
        }
    }
}
