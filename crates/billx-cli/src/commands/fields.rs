//! Fields command - run the field patterns over plain text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use billx_core::extract_fields;

/// Arguments for the fields command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Text file to read, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,
}

pub fn run(args: FieldsArgs) -> anyhow::Result<()> {
    let text = if args.input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(&args.input)?
    };

    let extraction = extract_fields(&text);
    for error in &extraction.errors {
        warn!("{}", error);
    }

    println!("{}", serde_json::to_string_pretty(&extraction.fields)?);
    Ok(())
}
