use awsid::error::AwsidError;
use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            AwsidError::NotFound(_) => eprintln!("{}", e),
            _ => eprintln!("{} {}", "Error:".red(), e),
        }
        std::process::exit(1);
    }
}
