use clap::{arg, Command};

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("List the contacts matching the current filter")
}

pub(crate) fn filter_cli() -> Command {
    Command::new("filter")
        .about("Show only contacts whose name contains TEXT, or clear the filter")
        .arg(arg!([TEXT]... "The text to look for in names"))
}

pub(crate) fn add_cli() -> Command {
    Command::new("add")
        .about("Add a contact, or replace the number of an existing one")
        .arg(arg!(<NAME>... "The contact name"))
        .arg(arg!(-n --number <NUMBER> "The phone number"))
        .arg_required_else_help(true)
}

pub(crate) fn delete_cli() -> Command {
    Command::new("delete")
        .about("Delete a contact")
        .arg(arg!(<ID> "The contact id to be removed"))
        .arg_required_else_help(true)
}

pub(crate) fn refresh_cli() -> Command {
    Command::new("refresh")
        .about("Reload contacts from the service")
}
