//! Launch every job template matching a project and template name.
//!
//! Configuration comes from the environment (`AWX_URL`, `AWX_USERNAME`,
//! `AWX_PASSWORD` or `AWX_TOKEN` / `AWX_BEARER_TOKEN`, `AWX_PROXY`,
//! `AWX_CA_FILE`, `AWX_INSECURE`, `AWX_DEBUG`).
//!
//! ```sh
//! export AWX_URL=https://awx.example.com/api AWX_USERNAME=admin AWX_PASSWORD=...
//! RUST_LOG=awx_api=debug cargo run --bin awx-launch -- \
//!     "Demo Project" "Demo Job Template" node0.example.com \
//!     alertname=bla 'complex={"simple":"label"}'
//! ```

use serde_json::{Map, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use awx_api_rest::{Connection, ConnectionConfig};

const USAGE: &str = "Usage: awx-launch <project> <template> [limit] [key=value ...]";

struct Args {
    project: String,
    template: String,
    limit: String,
    extra_vars: Map<String, Value>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args(std::env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("{USAGE}");
        std::process::exit(2);
    });

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let connection = Connection::new(ConnectionConfig::from_env()?)?;

    let templates = connection
        .job_templates()
        .get()
        .filter("project__name", &args.project)
        .filter("name", &args.template)
        .send()
        .await?;

    if templates.count() == 0 {
        connection.close().await;
        return Err(format!(
            "Template '{}' not found in project '{}'",
            args.template, args.project
        )
        .into());
    }

    for template in templates.results() {
        if !args.limit.is_empty() && !template.ask_limit_on_launch() {
            warn!(
                template = template.name(),
                limit = %args.limit,
                "Template doesn't prompt for a limit on launch, the limit will be ignored"
            );
        }
        if !args.extra_vars.is_empty() && !template.ask_vars_on_launch() {
            warn!(
                template = template.name(),
                "Template doesn't prompt for variables on launch, extra vars will be ignored"
            );
        }

        let launched = connection
            .job_templates()
            .id(template.id())
            .launch()
            .post()
            .limit(args.limit.as_str())
            .extra_vars(args.extra_vars.clone())
            .send()
            .await?;

        info!(template = template.name(), job = launched.job(), "Launched job");
        println!("{}\t{}", template.name(), launched.job());
    }

    connection.close().await;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let project = args.next().ok_or("missing project name")?;
    let template = args.next().ok_or("missing template name")?;
    let limit = args.next().unwrap_or_default();

    let mut extra_vars = Map::new();
    for arg in args {
        let (name, value) = parse_extra_var(&arg)?;
        extra_vars.insert(name, value);
    }

    Ok(Args {
        project,
        template,
        limit,
        extra_vars,
    })
}

/// Parse `key=value`. Values starting with `{` are JSON, anything else a string.
fn parse_extra_var(arg: &str) -> Result<(String, Value), String> {
    let (name, value) = arg
        .split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("bad extra var '{arg}', expected key=value"))?;

    let value = if value.starts_with('{') {
        serde_json::from_str(value).map_err(|e| format!("bad JSON in extra var '{name}': {e}"))?
    } else {
        Value::String(value.to_string())
    };

    Ok((name.to_string(), value))
}
