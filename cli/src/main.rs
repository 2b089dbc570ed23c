use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use snowname_core::diagnostics::{WarningDestination, check_strict, report_warnings};
use snowname_core::{DialectConfig, Ident, IdentifierPreparer, lint_identifiers};

#[derive(Parser, Debug)]
#[command(
    name = "snowname",
    about = "Fold and quote identifiers for an uppercase-folding warehouse SQL engine"
)]
#[command(version)]
struct Cli {
    /// Dialect config file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the identifier quote character
    #[arg(long, global = true)]
    quote: Option<char>,

    /// Override the name separator character
    #[arg(long, global = true)]
    separator: Option<char>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert names as the engine reports them into canonical form
    Canonical { names: Vec<String> },

    /// Convert canonical names into the form the engine stores
    Storage {
        /// Treat the names as explicitly quoted identifiers
        #[arg(long)]
        quoted: bool,
        names: Vec<String>,
    },

    /// Render names for SQL text, quoting where needed
    Quote { names: Vec<String> },

    /// Join name parts into one qualified name
    Qualify {
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Report names that cannot be written bare
    Lint {
        /// File with one name per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Fail when a name can only ever be used quoted
        #[arg(long)]
        strict: bool,

        /// Warning output destination: file path or "stderr" (default: stderr)
        #[arg(long)]
        emit_warnings: Option<PathBuf>,

        names: Vec<String>,
    },
}

fn load_config(cli: &Cli) -> Result<DialectConfig> {
    let mut config = match &cli.config {
        Some(path) => DialectConfig::from_path(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => DialectConfig::default(),
    };
    if let Some(quote) = cli.quote {
        config.quote = quote;
    }
    if let Some(separator) = cli.separator {
        config.separator = separator;
    }
    config.validate().context("Invalid dialect settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let preparer = IdentifierPreparer::new(load_config(&cli)?);

    match cli.command {
        Command::Canonical { names } => {
            for name in &names {
                let ident = preparer.to_canonical(name);
                if ident.quoted {
                    println!("{} {}", ident, "(quoted)".dimmed());
                } else {
                    println!("{ident}");
                }
            }
        }
        Command::Storage { quoted, names } => {
            for name in names {
                let ident = if quoted {
                    Ident::quoted(name)
                } else {
                    Ident::new(name)
                };
                println!("{}", preparer.to_storage(&ident));
            }
        }
        Command::Quote { names } => {
            for name in names {
                println!("{}", preparer.quote_if_needed(&Ident::new(name)));
            }
        }
        Command::Qualify { parts } => {
            let idents: Vec<Ident> = parts.into_iter().map(Ident::new).collect();
            println!("{}", preparer.qualify(idents.iter().map(Some)));
        }
        Command::Lint {
            input,
            strict,
            emit_warnings,
            mut names,
        } => {
            if let Some(path) = &input {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {}", path.display()))?;
                names.extend(
                    text.lines()
                        .map(str::trim)
                        .filter(|l| !l.is_empty())
                        .map(str::to_string),
                );
            }
            if names.is_empty() {
                bail!("No names to lint: pass names or --input");
            }

            let warnings = lint_identifiers(&preparer, names.iter().map(String::as_str));
            let dest = WarningDestination::from_option(emit_warnings.as_deref());
            report_warnings(&warnings, &dest).context("Failed to write warnings")?;

            let summary = format!(
                "{} name(s) checked, {} need quoting",
                names.len(),
                warnings.len()
            );
            if warnings.is_empty() {
                println!("{}", summary.green());
            } else {
                println!("{}", summary.yellow());
            }

            if strict {
                check_strict(&warnings)?;
            }
        }
    }

    Ok(())
}
