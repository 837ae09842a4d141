//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the tix tool: viewing,
//! transitioning and linking Jira tickets, plus a connection check.

mod link;
mod transition;
mod view;
mod whoami;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use tix_core::output::{ColorMode, print_error, print_hint};
use tix_jira::JiraError;

/// Top-level CLI command for the tix tool
#[derive(Parser)]
#[command(name = "tix")]
#[command(display_name = "🎫 Tix")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "View, transition, and link Jira tickets from the terminal")]
#[command(
  long_about = "Tix talks to the Jira Cloud REST API so you can look at a ticket, move it\n\
        through its workflow, and manage its links without leaving the terminal.\n\n\
        Credentials are read from ATLASSIAN_EMAIL and ATLASSIAN_API_TOKEN (and\n\
        optionally ATLASSIAN_SITE), from the environment or a .env file in the\n\
        current directory."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages (every request and response status)\n\
             -vvv: Show trace level messages (including response bodies)"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Jira site to talk to (overrides $ATLASSIAN_SITE)
  #[arg(
    long,
    global = true,
    value_name = "HOST",
    long_help = "Jira site to talk to, such as acme.atlassian.net.\n\n\
             Overrides $ATLASSIAN_SITE. A bare host is reached over https://;\n\
             an explicit http:// or https:// prefix is kept."
  )]
  pub site: Option<String>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the tix tool
#[derive(Subcommand)]
pub enum Commands {
  /// Link two tickets, or list and remove links
  #[command(long_about = "Create, list, and remove links between Jira tickets.\n\n\
            tix link SOURCE TARGET TYPE creates a link that reads \"SOURCE <outward> TARGET\",\n\
            for example 'tix link PROJ-1 PROJ-2 Blocks' makes PROJ-1 block PROJ-2. The type\n\
            may be given by name, id, or either direction label (\"is blocked by\").\n\n\
            Use --list-types to see the link types on your site, SOURCE --list to see a\n\
            ticket's links and their ids, and SOURCE --remove ID to delete one.")]
  #[command(alias = "ln")]
  Link(link::LinkArgs),

  /// Move a ticket to another status
  #[command(long_about = "Transition a Jira ticket to a different status.\n\n\
            The status is matched against the transitions Jira offers right now: first\n\
            exactly, then ignoring case, then as a partial name ('in prog'). A name that\n\
            matches more than one transition is rejected with the candidates listed.\n\n\
            Use --list to see the available transitions and --dry-run to check what\n\
            would happen without changing the ticket.")]
  #[command(alias = "tr")]
  Transition(transition::TransitionArgs),

  /// Show a ticket
  #[command(long_about = "Display a Jira ticket: status, people, dates, description,\n\
            links, subtasks, parent and attachments.\n\n\
            Use --full to include the five most recent comments and --json to print the\n\
            raw API response instead.")]
  #[command(alias = "v")]
  View(view::ViewArgs),

  /// Check credentials and the connection to Jira
  #[command(long_about = "Report which credential variables are set (the token is never\n\
            printed), then ask Jira who those credentials belong to.")]
  #[command(alias = "test-connection")]
  Whoami,
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  cli.colors.apply();

  let site = cli.site.as_deref();
  match cli.command {
    Commands::Link(link) => link::handle_link_command(link, site),
    Commands::Transition(transition) => transition::handle_transition_command(transition, site),
    Commands::View(view) => view::handle_view_command(view, site),
    Commands::Whoami => whoami::handle_whoami_command(site),
  }
}

/// Print a failed command's error and, for Jira errors, what to try next.
pub fn report_error(err: &anyhow::Error) {
  print_error(&format!("{err:#}"));

  let hint = err
    .chain()
    .find_map(|cause| cause.downcast_ref::<JiraError>())
    .and_then(JiraError::hint);
  if let Some(hint) = hint {
    print_hint(&hint);
  }
}
