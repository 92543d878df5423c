use clap::Parser;
use colored::Colorize;
use mwedit::api::EditorApi;
use mwedit::commands::{CmdMessage, MessageLevel};
use mwedit::config::WriteConf;
use mwedit::error::Result;
use mwedit::host::term::TermHost;
use mwedit::wiki::http::HttpConnector;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let host = match &cli.file {
        Some(path) => TermHost::open(path)?,
        None => TermHost::new(),
    };

    let conf_path = match &cli.config {
        Some(path) => path.clone(),
        None => WriteConf::default_path().expect("Could not determine home directory"),
    };
    let conf = WriteConf::load(&conf_path)?;

    let mut api = EditorApi::new(host, HttpConnector, conf);

    let result = match &cli.command {
        Commands::Read { article } => api.read(article.as_deref())?,
        Commands::Write { article } => api.write(article.as_deref())?,
        Commands::Diff { article } => api.diff(article.as_deref())?,
        Commands::Browse { article } => api.browse(article.as_deref())?,
    };

    print_messages(&result.messages);
    api.host_mut().flush()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
