use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Location of the launch records CSV
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Logging level (overrides env/config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the interactive dashboard (default)
    Serve(ServeArgs),

    /// Print the launch outcome counts used by the pie chart
    Outcomes(OutcomesArgs),

    /// Print the launches within a payload range used by the scatter chart
    Payload(PayloadArgs),

    /// List launch sites with record and success counts
    Sites(SitesArgs),

    /// Write an example config file into the current directory
    Init,

    /// Print the effective configuration
    PrintConfig(PrintConfigArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind. Replaces config [server].addr if provided.
    #[arg(long)]
    pub addr: Option<String>,

    /// Port to bind. Replaces config [server].port if provided.
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments for the outcomes command
#[derive(Parser, Debug)]
pub struct OutcomesArgs {
    /// Launch site, or "ALL" for every site
    #[arg(long, default_value = "ALL")]
    pub site: String,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the payload command
#[derive(Parser, Debug)]
pub struct PayloadArgs {
    /// Launch site, or "ALL" for every site
    #[arg(long, default_value = "ALL")]
    pub site: String,

    /// Lower payload bound in kg (inclusive). Defaults to the data minimum.
    #[arg(long)]
    pub min: Option<f64>,

    /// Upper payload bound in kg (inclusive). Defaults to the data maximum.
    #[arg(long)]
    pub max: Option<f64>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the sites command
#[derive(Parser, Debug)]
pub struct SitesArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print-config command
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}
