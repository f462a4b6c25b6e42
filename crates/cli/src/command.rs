use clap::{Parser, Subcommand};
use std::{convert::Infallible, path::PathBuf};
use vocab_core::Tags;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Lists vocabulary, optionally filtered by a search query.
    #[command(alias = "ls")]
    List { query: Option<String> },
    /// Lists tags and how many words use them.
    Tags,
    /// Adds a word.
    Add {
        word: String,
        english: String,
        farsi: String,
        /// Comma separated, e.g. "nature,object".
        #[arg(value_parser = parse_tags)]
        tags: Option<Tags>,
    },
    /// Changes a word, options left out keep their current value.
    Edit {
        word: String,
        #[arg(short, long, allow_hyphen_values = true)]
        english: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        farsi: Option<String>,
        /// Comma separated, an empty value removes every tag.
        #[arg(short, long, allow_hyphen_values = true, value_parser = parse_tags)]
        tags: Option<Tags>,
    },
    /// Removes a word.
    #[command(alias = "rm")]
    Remove { word: String },
    /// Imports CSV with the columns word,eng,fa,tags.
    Import {
        /// The path to the CSV file, - reads stdin.
        file: PathBuf,
    },
    /// Renames a tag on every word.
    RenameTag {
        old: String,
        new: String,
        /// Skips the confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Removes a tag from every word.
    DeleteTag {
        tag: String,
        /// Skips the confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

fn parse_tags(list: &str) -> Result<Tags, Infallible> {
    Ok(Tags::parse_list(list))
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        let args = std::iter::once("vocab").chain(args.iter().copied());
        Cli::try_parse_from(args).map(|cli| cli.command)
    }

    #[test]
    fn verifies_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_query() {
        assert_eq!(parse(&["list"]).unwrap(), Command::List { query: None });
        assert_eq!(
            parse(&["ls", "sky"]).unwrap(),
            Command::List {
                query: Some("sky".to_string())
            }
        );
    }

    #[test]
    fn parses_add() {
        let command = parse(&["add", "book", "book", "کتاب", "object, nature"]).unwrap();
        assert_eq!(
            command,
            Command::Add {
                word: "book".to_string(),
                english: "book".to_string(),
                farsi: "کتاب".to_string(),
                tags: Some(Tags::parse_list("nature,object")),
            }
        );
        assert!(parse(&["add", "book"]).is_err());
    }

    #[test]
    fn parses_edit_options() {
        let command = parse(&["edit", "sky", "--farsi", "آسمان", "--tags", ""]).unwrap();
        assert_eq!(
            command,
            Command::Edit {
                word: "sky".to_string(),
                english: None,
                farsi: Some("آسمان".to_string()),
                tags: Some(Tags::new()),
            }
        );
        assert!(parse(&["edit", "sky", "--farsi"]).is_err());
        assert!(parse(&["edit", "sky", "--colour", "blue"]).is_err());
    }

    #[test]
    fn accepts_values_that_look_like_flags() {
        assert_eq!(
            parse(&["remove", "--", "-y"]).unwrap(),
            Command::Remove {
                word: "-y".to_string()
            }
        );
        let command = parse(&["edit", "sky", "--english", "-y"]).unwrap();
        assert!(matches!(command, Command::Edit { english: Some(english), .. } if english == "-y"));
    }

    #[test]
    fn parses_confirmation_flag() {
        assert_eq!(
            parse(&["rename-tag", "--yes", "nature", "natural"]).unwrap(),
            Command::RenameTag {
                old: "nature".to_string(),
                new: "natural".to_string(),
                yes: true,
            }
        );
        assert_eq!(
            parse(&["delete-tag", "nature"]).unwrap(),
            Command::DeleteTag {
                tag: "nature".to_string(),
                yes: false,
            }
        );
    }

    #[test]
    fn parses_import_file() {
        assert_eq!(
            parse(&["import", "words.csv"]).unwrap(),
            Command::Import {
                file: "words.csv".into()
            }
        );
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(parse(&["frobnicate"]).is_err());
        assert!(parse(&[]).is_err());
    }
}
