use std::io::Write;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::form::{Field, FormError, FormValidator, FormValues};

#[derive(Parser, Debug)]
#[command(name = "contact-form")]
#[command(about = "Contact form with live field validation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Run in CLI mode (print output and exit, no interactive TUI)
    #[arg(long, global = true)]
    pub cli: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the form; opens it pre-filled unless --cli is given
    Submit(SubmitArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    /// First name (at least 5 characters)
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Optional message
    #[arg(long, default_value = "")]
    pub message: String,

    /// Print the accepted submission as JSON
    #[arg(long)]
    pub json: bool,
}

impl SubmitArgs {
    pub fn values(&self) -> FormValues {
        FormValues {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Run CLI mode (`--cli`) and return the process exit code
pub fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> Result<i32> {
    match cli.command {
        Some(Commands::Submit(ref args)) => {
            let accepted = run_submit(args, out, err)?;
            Ok(if accepted { 0 } else { 1 })
        }
        None => {
            writeln!(err, "Error: CLI mode requires a command")?;
            Ok(1)
        }
    }
}

/// Validate and submit headlessly, writing the summary to `out` and errors to `err`.
///
/// Returns `Ok(false)` when validation failed; the caller decides the exit code.
pub fn run_submit<O: Write, E: Write>(args: &SubmitArgs, out: &mut O, err: &mut E) -> Result<bool> {
    let mut form = FormValidator::new();
    let values = args.values();
    for field in Field::ALL {
        form.set_field(field, values.get(field));
    }

    match form.submit() {
        Ok(submission) => {
            info!("CLI submission accepted");
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&submission)?)?;
            } else {
                for item in submission.display_items() {
                    writeln!(out, "{}", item.text())?;
                }
            }
            Ok(true)
        }
        Err(e @ FormError::Invalid(_)) => {
            for line in e.error_lines() {
                writeln!(err, "{}", line)?;
            }
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
