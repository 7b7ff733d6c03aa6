// src/cli.rs
use std::{
    io::{self, BufRead, Read, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::options::AppOptions,
    controller::Controller,
    host::{AlwaysConfirm, DirSaver, InlinePageHost, PageHost, SavedPageHost},
    log,
    progress::Progress,
    status::Status,
};

#[derive(Parser, Debug)]
#[command(name = "profile_harvest", version, about = "Collect LinkedIn profile links from saved pages")]
pub struct Cli {
    /// Directory holding the saved profile list and the debug log
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a saved page and add the profiles it links to
    Extract {
        /// Saved HTML page, or `-` for stdin
        #[arg(long)]
        page: PathBuf,

        /// Page location, when the saved page doesn't carry one
        #[arg(long)]
        url: Option<String>,
    },
    /// Write all saved profiles to a timestamped CSV file
    Export {
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Forget every saved profile
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Show the saved profiles
    List,
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(dir) = &self.store_dir {
            opts.store.dir = dir.clone();
        }
        if let Command::Export { out_dir: Some(dir) } = &self.command {
            opts.export.out_dir = dir.clone();
        }
        opts
    }
}

/// Prints the busy line to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn status(&mut self, status: &Status) {
        eprintln!("{status}");
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let opts = cli.options();
    log::init(&opts.log_path());

    let mut controller = Controller::open(&opts);

    let status = match cli.command {
        Command::Extract { page, url } => {
            let mut host: Box<dyn PageHost> = if page.as_os_str() == "-" {
                let mut html = s!();
                io::stdin().read_to_string(&mut html).wrap_err("reading page from stdin")?;
                match url {
                    Some(u) => Box::new(InlinePageHost::new(Some(u), html)),
                    None => Box::new(InlinePageHost::discovering(html)),
                }
            } else {
                Box::new(SavedPageHost::new(page, url))
            };
            Some(controller.extract(host.as_mut(), &mut CliProgress))
        }
        Command::Export { .. } => {
            let mut saver = DirSaver::new(&opts.export.out_dir);
            Some(controller.export(&mut saver))
        }
        Command::Clear { yes } => {
            if yes {
                controller.clear(&mut AlwaysConfirm)
            } else {
                controller.clear(&mut stdin_confirm)
            }
        }
        Command::List => None,
    };

    print!("{}", controller.view(status.as_ref()).render_text());
    if controller.store().is_empty() && status.is_none() {
        println!("No profiles saved");
    }
    Ok(())
}

fn stdin_confirm(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    let _ = io::stderr().flush();
    let mut line = s!();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
