use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "awsid", bin_name = "awsid", version)]
#[command(about = "Get AWS account ID from alias name", long_about = None)]
pub struct Cli {
    /// Alias to look up (substring match; omit to list every account)
    pub alias: Option<String>,

    /// Output format: json, table or csv
    #[arg(short, long, value_name = "FORMAT", help_heading = "Output")]
    pub format: Option<String>,

    /// Output in JSON format
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// Output as a table
    #[arg(long, help_heading = "Output")]
    pub table: bool,

    /// Output in CSV format
    #[arg(long, help_heading = "Output")]
    pub csv: bool,

    /// Sort ascending by field (id, name, email, status, joined_method, joined_timestamp)
    #[arg(long, value_name = "FIELD", help_heading = "Output")]
    pub sort: Option<String>,

    /// Sort descending by field
    #[arg(long, value_name = "FIELD", help_heading = "Output")]
    pub sort_desc: Option<String>,

    /// AWS profile used to refresh the account list
    #[arg(long, help_heading = "AWS")]
    pub profile: Option<String>,

    /// AWS region used to refresh the account list
    #[arg(long, help_heading = "AWS")]
    pub region: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
