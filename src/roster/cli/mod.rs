mod args;
mod menu;
mod print;
mod setup;

use args::{Cli, Commands};
use clap::Parser;
use menu::Menu;
use print::{print_error, print_list, print_messages, print_records};
use roster::api::CmdMessage;
use roster::commands::RecordUpdate;
use roster::config::{ProgrammePolicy, RosterConfig};
use roster::error::Result;
use setup::{init_context, setup_logging, AppContext};
use std::io::{self, IsTerminal, Write};

/// Exit status for a finished run: 0 on success, 1 when a scripted command failed.
pub fn run() -> Result<i32> {
    let mut cli = Cli::parse();
    let command = cli.command.take();
    setup_logging(cli.verbose);
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Config must stay usable even when the records file is unreadable
    let command = match command {
        Some(Commands::Config { key, value }) => {
            handle_config(&mut ctx, &mut out, key, value)?;
            return Ok(0);
        }
        other => other,
    };
    let mut api = ctx.open_api(&cli)?;

    let outcome = match command {
        None => {
            let stdin = io::stdin();
            Menu::new(&mut api, stdin.lock(), &mut out).run()?;
            return Ok(0);
        }
        Some(Commands::Config { .. }) => Ok(()),
        Some(Commands::Add {
            id,
            name,
            programme,
            dob,
            gpa,
        }) => api
            .add(&id, &name, &programme, &dob, &gpa)
            .and_then(|result| Ok(print_messages(&mut out, &result.messages)?)),
        Some(Commands::Search { id }) => api
            .search(&id)
            .and_then(|result| Ok(print_records(&mut out, &result)?)),
        Some(Commands::Delete { id }) => api
            .delete(&id)
            .and_then(|result| Ok(print_messages(&mut out, &result.messages)?)),
        Some(Commands::Update {
            id,
            name,
            programme,
            dob,
            gpa,
        }) => {
            let update = RecordUpdate {
                name,
                programme,
                date_of_birth: dob,
                gpa,
            };
            api.update(&id, &update)
                .and_then(|result| Ok(print_messages(&mut out, &result.messages)?))
        }
        Some(Commands::List) => {
            let result = api.list_all();
            Ok(print_list(&mut out, &result)?)
        }
    };

    match outcome {
        Ok(()) => Ok(0),
        Err(err) => {
            print_error(&mut out, &err)?;
            Ok(1)
        }
    }
}

fn handle_config<W: Write>(
    ctx: &mut AppContext,
    out: &mut W,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let mut config = ctx.config.clone();
    match (key.as_deref(), value) {
        (None, _) => {
            writeln!(out, "data-file = {}", config.data_file)?;
            writeln!(out, "programme-policy = {}", config.programme_policy)?;
            return Ok(());
        }
        (Some("data-file"), None) => {
            writeln!(out, "data-file = {}", config.data_file)?;
            return Ok(());
        }
        (Some("programme-policy"), None) => {
            writeln!(out, "programme-policy = {}", config.programme_policy)?;
            return Ok(());
        }
        (Some("data-file"), Some(v)) => config.data_file = v,
        (Some("programme-policy"), Some(v)) => match v.parse::<ProgrammePolicy>() {
            Ok(policy) => config.programme_policy = policy,
            Err(msg) => {
                print_messages(out, &[CmdMessage::error(msg)])?;
                return Ok(());
            }
        },
        (Some(other), _) => {
            print_messages(out, &[CmdMessage::error(format!("Unknown config key: {}", other))])?;
            return Ok(());
        }
    }

    save_config(&config, ctx)?;
    print_messages(out, &[CmdMessage::success("Configuration saved.")])?;
    Ok(())
}

fn save_config(config: &RosterConfig, ctx: &mut AppContext) -> Result<()> {
    config.save(&ctx.data_dir)?;
    ctx.config = config.clone();
    Ok(())
}
