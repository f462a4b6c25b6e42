//! Command line client for the vocabulary store.

mod command;
mod config;
mod render;

use clap::Parser;
use command::{Cli, Command};
use config::Config;
use eyre::WrapErr;
use std::io::{stdin, stdout, Read, Write};
use tracing_subscriber::EnvFilter;
use vocab_client::{Client, ClientError, VocabularyViewModel};
use vocab_core::{Confirm, NewVocabulary, TagDeletion, TagRename, VocabularyEdit};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::debug!("Using store at {}", config.api_url);
    let mut vm = VocabularyViewModel::new(Client::new(config.api_url));
    vm.load().await.map_err(notify)?;
    run(&mut vm, cli.command).await
}

/// Turns a client error into the message shown to the user.
fn notify(err: ClientError) -> eyre::Report {
    tracing::warn!("{err}");
    eyre::eyre!(err.user_message())
}

async fn run(vm: &mut VocabularyViewModel<Client>, command: Command) -> eyre::Result<()> {
    match command {
        Command::List { query } => {
            let records = vm.search(query.as_deref().unwrap_or_default());
            println!("{}", render::vocabulary_table(&records));
        }
        Command::Tags => {
            println!("{}", render::tag_summary(&vm.tag_summary()));
        }
        Command::Add {
            word,
            english,
            farsi,
            tags,
        } => {
            let new = NewVocabulary::new(&word, &english, &farsi, tags.unwrap_or_default())?;
            vm.add(new).await.map_err(notify)?;
            println!("Added {}", word.trim());
        }
        Command::Edit {
            word,
            english,
            farsi,
            tags,
        } => {
            let mut edit = VocabularyEdit::new(&word);
            if let Some(english) = english {
                edit = edit.english(&english);
            }
            if let Some(farsi) = farsi {
                edit = edit.farsi(&farsi);
            }
            if let Some(tags) = tags {
                edit = edit.tags(tags);
            }
            vm.edit(edit).await.map_err(notify)?;
            println!("Updated {}", word.trim());
        }
        Command::Remove { word } => {
            vm.remove(&word).await.map_err(notify)?;
            println!("Removed {}", word.trim());
        }
        Command::Import { file } => {
            let csv = if file.as_os_str() == "-" {
                let mut csv = String::new();
                stdin()
                    .read_to_string(&mut csv)
                    .wrap_err("Failed to read CSV from stdin")?;
                csv
            } else {
                std::fs::read_to_string(&file)
                    .wrap_err_with(|| format!("Failed to read {}", file.display()))?
            };
            vm.import_bulk(csv).await.map_err(notify)?;
            println!("Imported, {} words in total", vm.vocabulary().len());
        }
        Command::RenameTag { old, new, yes } => {
            let rename = TagRename::new(&old, &new)?;
            if !confirm(&rename.prompt(), yes)? {
                println!("Cancelled");
                return Ok(());
            }
            vm.rename_tag(rename.confirm()).await.map_err(notify)?;
            println!("Renamed {old} to {new}");
        }
        Command::DeleteTag { tag, yes } => {
            let deletion = TagDeletion::new(&tag)?;
            if !confirm(&deletion.prompt(), yes)? {
                println!("Cancelled");
                return Ok(());
            }
            vm.delete_tag(deletion.confirm()).await.map_err(notify)?;
            println!("Deleted tag {tag}");
        }
    }
    Ok(())
}

/// Asks a yes/no question on stdin, `assume_yes` skips the question.
fn confirm(prompt: &str, assume_yes: bool) -> eyre::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    stdout().flush().wrap_err("Failed to flush stdout")?;
    let mut answer = String::new();
    stdin()
        .read_line(&mut answer)
        .wrap_err("Failed to read answer")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
