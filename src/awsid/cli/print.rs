use awsid::api::{CmdMessage, MessageLevel};
use colored::Colorize;

/// Messages go to stderr so stdout only carries rendered output.
/// Success lines are shown in verbose mode only.
pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Success if verbose => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            _ => {}
        }
    }
}

pub(super) fn print_output(rendered: &str) {
    print!("{}", rendered);
}
