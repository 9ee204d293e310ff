//! terraform-helper — entry point.

use clap::{CommandFactory, Parser};

use terraform_helper::DocsClient;
use terraform_helper_cli::config::{resolve_settings, RawArgs, DEFAULT_CDKTF_LANGUAGE};
use terraform_helper_cli::lookup::render_document;
use terraform_helper_cli::{lookup, version, TerminalSelector};

const EXAMPLES: &str = "\
Examples:
  terraform-helper aws api_gateway
  terraform-helper aws api_gateway_deployment -r
  terraform-helper google compute_instance
  terraform-helper azurerm virtual_machine -d
  terraform-helper aws lambda_function --cdktf
  terraform-helper aws lambda_function --cdktf typescript
  terraform-helper aws lambda_function --cdktf python";

#[derive(Parser)]
#[command(
    name = "terraform-helper",
    about = "Look up Terraform provider documentation from the terminal",
    disable_version_flag = true,
    after_help = EXAMPLES
)]
struct Cli {
    /// Provider name (e.g., aws, google, azurerm).
    provider: Option<String>,

    /// Resource or data source name (partial matching supported).
    name: Option<String>,

    /// Search in resources (default).
    #[arg(short = 'r', long = "resource", conflicts_with = "datasource")]
    resource: bool,

    /// Search in data sources.
    #[arg(short = 'd', long = "datasource")]
    datasource: bool,

    /// Use CDKTF documentation for the given language (default: typescript).
    #[arg(
        long,
        value_name = "LANGUAGE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_CDKTF_LANGUAGE
    )]
    cdktf: Option<String>,

    /// Show version information.
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

/// Rewrite `--cdktf` into `--cdktf=<language>`.
///
/// The token after `--cdktf` is its language only once both positionals
/// have been seen; before that it is a positional and the language is
/// typescript.
fn normalize_cdktf<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut rest = args.into_iter().map(Into::<String>::into).peekable();
    let mut out: Vec<String> = rest.next().into_iter().collect();
    let mut positionals = 0;

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--" => {
                out.push(arg);
                out.extend(rest.by_ref());
                break;
            }
            "--cdktf" => {
                let takes_value =
                    positionals >= 2 && rest.peek().is_some_and(|next| !next.starts_with('-'));
                let language = if takes_value { rest.next() } else { None };
                let language = language.unwrap_or_else(|| DEFAULT_CDKTF_LANGUAGE.to_string());
                out.push(format!("--cdktf={language}"));
            }
            "--log-level" => {
                out.push(arg);
                out.extend(rest.next());
            }
            _ => {
                if !arg.starts_with('-') {
                    positionals += 1;
                }
                out.push(arg);
            }
        }
    }
    out
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_from(normalize_cdktf(
        std::env::args_os().map(|a| a.to_string_lossy().into_owned()),
    ));

    if cli.version {
        println!("{}", version::long_version());
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let args = RawArgs {
        provider: cli.provider.unwrap_or_default(),
        search_term: cli.name.unwrap_or_default(),
        resource: cli.resource,
        datasource: cli.datasource,
        cdktf: cli.cdktf,
    };

    let settings = match resolve_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e:#}\n");
            let _ = Cli::command().write_help(&mut std::io::stderr());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&settings).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(settings: &terraform_helper_cli::Settings) -> anyhow::Result<()> {
    let client = DocsClient::with_endpoints(settings.endpoints.clone(), settings.timeout)?;
    let found = lookup(&client, settings, &TerminalSelector).await?;
    let stdout = std::io::stdout();
    render_document(&found.markdown, &mut stdout.lock())?;
    Ok(())
}
