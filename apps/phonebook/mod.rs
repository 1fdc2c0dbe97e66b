use std::io::{self, Write};
use std::time::Instant;
use clap::{error, Parser, ArgMatches, Command};
use reedline::{Reedline, Signal};

mod prompt;
use prompt::MyPrompt;

mod cmds {
    pub(crate) mod contact_cmd;
}

use directory::{
    configuration as cfg,
    logger,
    ObjectId,
    APIClient,
    Phonebook,
    phonebook::{Submission, Deletion},
};

type Book = Phonebook<APIClient, fn(&str) -> bool>;

fn build_cli() -> Command {
    let mut cmd = Command::new("phonebook")
        .about("Interactive phonebook shell")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::contact_cmd::list_cli())
        .subcommand(cmds::contact_cmd::filter_cli())
        .subcommand(cmds::contact_cmd::add_cli())
        .subcommand(cmds::contact_cmd::delete_cli())
        .subcommand(cmds::contact_cmd::refresh_cli())
        .help_template("{subcommands}");

    cmd.error(error::ErrorKind::InvalidSubcommand, "Invalid command provided");
    cmd
}

fn ask(message: &str) -> bool {
    print!("{message} [y/N] ");
    _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn print_contacts(book: &Book) {
    let visible = book.visible();
    match book.filter().is_empty() {
        true => println!("Contacts (total:{}):", visible.len()),
        false => println!("Contacts matching '{}' ({}/{}):", book.filter(), visible.len(), book.contacts().len()),
    }
    for contact in visible {
        println!(" {}\t{}\t{}", contact.id(), contact.name(), contact.number());
    }
}

async fn execute_command(matches: ArgMatches, book: &mut Book) {
    match matches.subcommand() {
        Some(("list", _)) => print_contacts(book),
        Some(("filter", m)) => {
            let text = m.get_many::<String>("TEXT")
                .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            book.set_filter(&text);
            print_contacts(book);
        }
        Some(("add", m)) => {
            let name = m.get_many::<String>("NAME")
                .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            let number = m.get_one::<String>("number").cloned().unwrap_or_default();

            book.set_name(&name);
            book.set_number(&number);
            match book.submit().await {
                Ok(Submission::Created(c)) => println!("[OK] Contact added: {}", c),
                Ok(Submission::Updated(c)) => println!("[OK] Contact updated: {}", c),
                Ok(Submission::Declined) => println!("Nothing changed."),
                Err(e) => println!("Error adding contact: {e}"),
            }
        }
        Some(("delete", m)) => {
            let id = m.get_one::<String>("ID").cloned().unwrap_or_default();
            let Ok(id) = ObjectId::try_from(id.as_str()) else {
                println!("Error: invalid contact id: {}", id);
                return;
            };

            match book.delete(&id).await {
                Ok(Deletion::Deleted(c)) => println!("[OK] Contact deleted: {}", c),
                Ok(Deletion::Declined) => println!("Nothing changed."),
                Err(e) => println!("Error deleting contact: {e}"),
            }
        }
        Some(("refresh", _)) => {
            _ = book.load().await.map_err(|e| {
                println!("Error loading contacts: {e}");
            }).map(|total| {
                println!("[OK] {} contacts loaded", total);
            });
        }
        _ => println!("Unknown command"),
    }
}

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version = "1.0")]
#[command(about = "Interactive phonebook shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The base url of the contact service
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();
    let mut b = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = b.load(path) {
            eprintln!("Loading config error: {e}");
            return;
        }
    }
    if let Some(url) = opts.url.as_deref() {
        b.with_api_url(url);
    }

    let cfg = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building config error: {e}");
            return;
        }
    };
    logger::setup(cfg.log_level(), cfg.log_file());

    let client = match APIClient::new(cfg.phonebook().api_url()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating api client error: {e}");
            return;
        }
    };

    let mut book: Book = Phonebook::new(client, ask as fn(&str) -> bool)
        .with_notification_timeout(cfg.phonebook().notification_timeout());

    match book.load().await {
        Ok(total) => println!("Loaded {} contacts from {}", total, cfg.phonebook().api_url()),
        Err(e) => eprintln!("Loading contacts error: {e}"),
    }

    let mut cli = build_cli();
    let mut rl = Reedline::create();

    println!("Welcome to interactive phonebook shell. Type 'exit' to quit.\n");

    loop {
        book.clear_expired(Instant::now());
        let prompt = MyPrompt {
            notice: book.notification().map(|n| n.to_string()).unwrap_or_default(),
        };

        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();

                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace().map(|s| s.to_string())
                    .collect();

                if args[0] == "help" {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let cmd = args.join(" ");
                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &mut book).await,
                    Err(_) => {
                        println!("Error: invalid command: '{}'", cmd);
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }
}
