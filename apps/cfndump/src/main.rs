//! cfndump — writes the templates of all CloudFormation stacks to disk.
//!
//! Enumerates the account's active regions, then dumps every deployed
//! stack's template per region into the output directory, pretty-printed in
//! its original serialization and named
//! `{account}.{region}.{stack}.cfn.{json|yaml}`.
//!
//! Regions are processed sequentially; the first failing region aborts the
//! whole run with a non-zero exit, keeping whatever was already written.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cfndump_aws::{CloudFormationCatalog, StsIdentity, active_regions};
use cfndump_core::{Dumper, select_regions};

/// Command-line flags.
#[derive(Parser, Debug)]
#[command(
    name = "cfndump",
    version,
    about = "Writes the templates of all CloudFormation stacks to disk",
    long_about = "You can dump the templates of all CloudFormation stacks, \
                  from any or all regions, to disk."
)]
struct Cli {
    /// The AWS profile to use.
    #[arg(short, long)]
    profile: Option<String>,

    /// Shows debug output.
    #[arg(short, long)]
    verbose: bool,

    /// One or more comma-delimited regions to dump.
    #[arg(short, long, default_value = "")]
    regions: String,

    /// The directory where templates are persisted to disk.
    #[arg(short, long, default_value = ".")]
    output_dir: String,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise `debug` with `--verbose` and `warn`
/// without.
fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Check that the output directory exists before any network call.
fn validate_output_dir(dir: &str) -> Result<()> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => anyhow::bail!("{dir} is not a directory. Cannot proceed."),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            anyhow::bail!("{dir} does not exist. Create it first.")
        }
        Err(e) => Err(e).with_context(|| format!("error checking state of {dir}. Cannot proceed.")),
    }
}

async fn run(cli: Cli) -> Result<()> {
    validate_output_dir(&cli.output_dir)?;
    println!("Writing CloudFormation templates to directory: {}", cli.output_dir);

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(profile) = &cli.profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;

    let ec2 = aws_sdk_ec2::Client::new(&config);
    let active = active_regions(&ec2)
        .await
        .context("failed to enumerate active regions")?;
    let regions = select_regions(active, &cli.regions);
    debug!(count = regions.len(), "selected regions");

    // STS is global and the account is the same everywhere; one identity
    // client serves all regions.
    let identity = StsIdentity::new(aws_sdk_sts::Client::new(&config));

    for region in regions {
        let regional = aws_sdk_cloudformation::config::Builder::from(&config)
            .region(aws_sdk_cloudformation::config::Region::new(
                region.to_string(),
            ))
            .build();
        let catalog =
            CloudFormationCatalog::new(aws_sdk_cloudformation::Client::from_conf(regional));

        let dumper = Dumper::new(catalog, identity.clone(), cli.output_dir.as_str());

        match dumper.dump().await {
            Ok(num) => {
                info!(region = %region, count = num, "region dump complete");
                println!("{region}: Wrote {num} template(s)");
            }
            Err(e) => {
                // Earlier files stay on disk; report the partial count
                // before aborting the run.
                if e.written > 0 {
                    println!("{region}: Wrote {} template(s) before failing", e.written);
                }
                return Err(
                    anyhow::Error::new(e).context(format!("failed to dump region {region}"))
                );
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
