//! Interactive session.
//!
//! Reads one command per line from stdin and runs it against a single,
//! long-lived plan store, so changes persist until the session ends. Lines
//! use the same grammar as the one-shot commands, plus session commands for
//! signing in and out. Commands that change plans require a signed-in user.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::{error::ErrorKind, Parser, Subcommand};
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{ChatArgs, Cli, LoginArgs, PlanCommands, ProfileArgs};

const PROMPT: &str = "wayfarer> ";

/// One line of shell input.
#[derive(Parser)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show plan counts by status and the trips still ahead
    #[command(alias = "d")]
    Dashboard,
    /// Ask the travel assistant a question
    Chat(ChatArgs),
    /// Sign in with any non-empty username and password
    Login(LoginArgs),
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
    /// Show or edit the signed-in profile
    Profile(ProfileArgs),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the shell until `exit`, `quit` or end of input.
pub async fn run(cli: &mut Cli) -> Result<()> {
    cli.store_mut().subscribe(|event, plans| {
        debug!("Store changed: {event:?}, {} plans", plans.len());
    });
    info!("Shell session started");
    println!("Wayfarer shell. Type 'help' for commands, 'exit' to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{PROMPT}");
        std::io::stdout().flush().context("Failed to write prompt")?;

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            println!();
            break;
        };

        match execute_line(cli, &line).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => cli.renderer().render_error(&format!("{e:#}")),
        }
    }

    info!("Shell session ended");
    Ok(())
}

async fn execute_line(cli: &mut Cli, line: &str) -> Result<Flow> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(Flow::Continue);
    }

    let parsed = match ShellLine::try_parse_from(&tokens) {
        Ok(parsed) => parsed,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            print!("{}", e.render());
            return Ok(Flow::Continue);
        }
        Err(e) => {
            // Drop clap's trailing usage hint; the shell prompt follows.
            let rendered = e.render().to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            bail!("{}", first_line.trim_start_matches("error: "));
        }
    };

    match parsed.command {
        ShellCommand::Plan { command } => {
            if command.is_mutating() && !cli.session().is_authenticated() {
                bail!("Please sign in first: login <username> <password>");
            }
            cli.handle_plan_command(command)?;
        }
        ShellCommand::Dashboard => cli.dashboard()?,
        ShellCommand::Chat(args) => cli.chat(args).await?,
        ShellCommand::Login(args) => cli.login(args)?,
        ShellCommand::Logout => cli.logout()?,
        ShellCommand::Whoami => cli.whoami()?,
        ShellCommand::Profile(args) => cli.profile(args)?,
        ShellCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Split a line into words. Single and double quotes group words, and a
/// backslash escapes the next character outside single quotes.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                let escaped = chars.next().context("Line ends with a dangling backslash")?;
                current.push(escaped);
                in_token = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("Unterminated {q} quote");
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_words() {
        assert_eq!(
            tokenize("  plan   show 2 ").unwrap(),
            vec!["plan", "show", "2"]
        );
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            tokenize(r#"plan create "West Lake" -d 'Hangzhou, Zhejiang'"#).unwrap(),
            vec!["plan", "create", "West Lake", "-d", "Hangzhou, Zhejiang"]
        );
        assert_eq!(tokenize(r#"chat """#).unwrap(), vec!["chat", ""]);
        assert_eq!(tokenize(r#"say "it's""#).unwrap(), vec!["say", "it's"]);
    }

    #[test]
    fn test_tokenize_escapes() {
        assert_eq!(tokenize(r"a\ b c").unwrap(), vec!["a b", "c"]);
        assert_eq!(tokenize(r"'a\b'").unwrap(), vec![r"a\b"]);
        assert!(tokenize("trailing\\").is_err());
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let err = tokenize("plan create \"West Lake").unwrap_err();
        assert!(err.to_string().contains("Unterminated"));
    }

    #[test]
    fn test_shell_line_grammar() {
        let parsed = ShellLine::try_parse_from(["login", "alice", "pw"]).unwrap();
        assert!(matches!(parsed.command, ShellCommand::Login(_)));

        let parsed = ShellLine::try_parse_from(["profile", "--avatar", ""]).unwrap();
        assert!(matches!(
            parsed.command,
            ShellCommand::Profile(ProfileArgs { username: None, avatar: Some(ref a) }) if a.is_empty()
        ));

        let parsed = ShellLine::try_parse_from(["quit"]).unwrap();
        assert!(matches!(parsed.command, ShellCommand::Exit));

        let err = ShellLine::try_parse_from(["help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_shell_line_is_consistent() {
        use clap::CommandFactory;
        ShellLine::command().debug_assert();
    }
}
