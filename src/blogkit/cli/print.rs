use blogkit::api::{CmdMessage, MessageLevel};
use blogkit::model::PostMigration;
use colored::Colorize;

/// Messages go to stderr so that document output on stdout can be piped.
pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_document(output: &str) {
    println!("{}", output);
}

/// Printed as each post starts, so an aborted batch still lists what it touched.
pub(super) fn print_migration(migration: &PostMigration) {
    println!("{}", migration.dest_dir.display());
}
