use std::io::{self, Write};

use anyhow::Result;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::output::{self, OutputFormat, json, table};

pub fn run(args: &CliArgs) -> Result<()> {
    let env = common::load_env(args);
    let defaults = common::load_defaults(args, &env)?;

    if args.quiet {
        return Ok(());
    }

    let format = output::select_format(&args.output);
    match format {
        OutputFormat::Json => {
            let payload = json::config_to_json(&defaults);
            let body = json::emit_json_value(&payload, true)?;
            println!("{}", body);
        }
        _ => {
            let rows = vec![
                ("filename".to_string(), defaults.filename.clone()),
                ("user".to_string(), defaults.user.clone()),
                (
                    "password".to_string(),
                    json::mask_password(&defaults.password).to_string(),
                ),
                ("socket".to_string(), defaults.socket.clone()),
                ("host".to_string(), defaults.host.clone()),
                ("port".to_string(), defaults.effective_port().to_string()),
                ("database".to_string(), defaults.database.clone()),
            ];

            let rendered = table::render_key_value_table("Defaults", &rows, format);
            writeln!(io::stdout(), "{}", rendered)?;
        }
    }

    Ok(())
}
