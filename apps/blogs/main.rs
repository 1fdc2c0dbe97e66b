use clap::Parser;
use tokio::net::TcpListener;

use directory::{
    configuration as cfg,
    logger,
    create_parent_dirs,
    BlogStorage,
    SqliteStorage,
    blogs::{fixtures, server},
    core::server::shutdown_signal,
};

#[derive(Parser, Debug)]
#[command(name = "blogs")]
#[command(version = "1.0")]
#[command(about = "Blog list service", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The port used for listening
    #[arg(short, long)]
    port: Option<u16>,

    /// The sqlite database file, or :memory:
    #[arg(short, long, value_name = "DATABASE")]
    database: Option<String>,

    /// Replace the stored blogs with the sample blogs on start
    #[arg(long)]
    seed: bool,
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
    if let Some(port) = opts.port {
        b.with_port(port);
    }
    if let Some(database) = opts.database.as_ref() {
        b.with_database(database);
    }

    let cfg = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building config error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")]
    cfg.dump();

    if let Some(file) = cfg.log_file() {
        _ = create_parent_dirs(file);
    }
    logger::setup(cfg.log_level(), cfg.log_file());

    if cfg.database() != ":memory:" {
        if let Err(e) = create_parent_dirs(cfg.database()) {
            eprintln!("{e}");
            return;
        }
    }

    let mut storage = SqliteStorage::new();
    if let Err(e) = storage.open(cfg.database()) {
        eprintln!("Opening database {} error: {e}", cfg.database());
        return;
    }

    if opts.seed {
        match fixtures::seed(&mut storage) {
            Ok(blogs) => println!("Seeded {} blogs", blogs.len()),
            Err(e) => {
                eprintln!("Seeding blogs error: {e}");
                return;
            }
        }
    }

    let listener = match TcpListener::bind(*cfg.addr()).await {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Binding {} error: {e}", cfg.addr());
            return;
        }
    };

    let storage = server::shared(Box::new(storage));
    if let Err(e) = server::serve(listener, storage.clone(), shutdown_signal()).await {
        eprintln!("Blog service error: {e}");
    }

    if let Ok(mut guard) = storage.lock() {
        guard.close();
    };
}
