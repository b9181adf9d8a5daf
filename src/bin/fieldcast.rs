//! fieldcast: Turn a flat JSON object into struct field declarations
//!
//! Usage:
//!   # JSON as an argument
//!   fieldcast '{"head_block_number":72958298,"head_block_id":"0459415a"}'
//!
//!   # Read from a file, or from stdin with `-`
//!   fieldcast --file response.json
//!   curl -s $URL | fieldcast --file - --bare
//!
//!   # Emit a complete Go struct with json tags
//!   fieldcast --style go --struct DynamicGlobalProperties --tags "$(cat props.json)"

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fieldcast::logging::init_cli_logger;
use fieldcast::{
    render, render_json, ConvertConfig, ConvertError, Converter, LabelStyle, RenderConfig,
    UnderscorePolicy,
};
use std::fs;
use std::io::{stdin, Read};

#[derive(Parser, Debug)]
#[command(name = "fieldcast")]
#[command(about = "Convert a flat JSON object into struct field declarations", long_about = None)]
struct Args {
    /// JSON object text
    #[arg(value_name = "JSON", conflicts_with = "file")]
    json: Option<String>,

    /// Read the JSON object from a file ("-" for stdin)
    #[arg(long, short = 'f', value_name = "PATH")]
    file: Option<String>,

    /// Spelling of the type labels
    #[arg(long, value_enum, default_value_t = StyleArg::Descriptive)]
    style: StyleArg,

    /// Print only the declarations, without the header and blank lines
    #[arg(long)]
    bare: bool,

    /// Wrap the declarations in `type NAME struct { ... }`
    #[arg(long = "struct", value_name = "NAME")]
    struct_name: Option<String>,

    /// Append `json:"<key>"` tags to each declaration
    #[arg(long)]
    tags: bool,

    /// Remove underscores that do not precede a lowercase letter
    #[arg(long)]
    drop_orphan_underscores: bool,

    /// Emit the declarations as a JSON array instead of text
    #[arg(long = "json")]
    json_output: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Descriptive,
    Go,
    Rust,
}

impl From<StyleArg> for LabelStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Descriptive => LabelStyle::Descriptive,
            StyleArg::Go => LabelStyle::Go,
            StyleArg::Rust => LabelStyle::Rust,
        }
    }
}

impl Args {
    fn convert_config(&self) -> ConvertConfig {
        ConvertConfig {
            underscores: if self.drop_orphan_underscores {
                UnderscorePolicy::Drop
            } else {
                UnderscorePolicy::Keep
            },
        }
    }

    fn render_config(&self) -> RenderConfig {
        let base = if self.bare {
            RenderConfig::bare()
        } else {
            RenderConfig::default()
        };
        RenderConfig {
            style: self.style.into(),
            struct_name: self.struct_name.clone(),
            tags: self.tags,
            ..base
        }
    }

    fn read_input(&self) -> Result<String> {
        match (&self.json, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) if path == "-" => {
                let mut buf = String::new();
                stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read JSON from stdin")?;
                Ok(buf)
            }
            (None, Some(path)) => {
                fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
            }
            (None, None) => Err(ConvertError::MissingInput.into()),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_cli_logger(args.verbose);

    let text = args.read_input()?;
    let converter = Converter::new(args.convert_config());
    let fields = converter
        .convert_str(&text)
        .context("Failed to convert JSON input")?;

    tracing::debug!(count = fields.len(), "converted fields");

    let output = if args.json_output {
        render_json(&fields)?
    } else {
        render(&fields, &args.render_config())
    };

    println!("{}", output);

    Ok(())
}
