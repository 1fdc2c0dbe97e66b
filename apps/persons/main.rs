use clap::Parser;
use tokio::net::TcpListener;

use directory::{
    configuration as cfg,
    logger,
    create_parent_dirs,
    phonebook::{ContactStore, contact_store::sample_contacts, server},
    core::server::shutdown_signal,
};

const DEFAULT_PORT: u16 = 3001;

#[derive(Parser, Debug)]
#[command(name = "persons")]
#[command(version = "1.0")]
#[command(about = "Phonebook contact service", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The port used for listening
    #[arg(short, long)]
    port: Option<u16>,

    /// Start with the sample contacts
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();
    let mut b = cfg::Builder::new();
    b.with_default_port(DEFAULT_PORT);
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = b.load(path) {
            eprintln!("Loading config error: {e}");
            return;
        }
    }
    if let Some(port) = opts.port {
        b.with_port(port);
    }

    let cfg = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building config error: {e}");
            return;
        }
    };

    if let Some(file) = cfg.log_file() {
        _ = create_parent_dirs(file);
    }
    logger::setup(cfg.log_level(), cfg.log_file());

    let mut store = ContactStore::new();
    if opts.seed {
        for contact in sample_contacts() {
            store.put(contact);
        }
        println!("Seeded {} contacts", store.len());
    }

    let listener = match TcpListener::bind(*cfg.addr()).await {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Binding {} error: {e}", cfg.addr());
            return;
        }
    };

    if let Err(e) = server::serve(listener, server::shared(store), shutdown_signal()).await {
        eprintln!("Contact service error: {e}");
    }
}
