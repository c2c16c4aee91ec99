use base64::Engine as _;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::time::Instant;

use interview_citation_core::config::{
    apply_defaults, config_path, dialog_options_from_config, load_config, read_config, save_config, set_config_key,
    AppConfig,
};
use interview_citation_core::dialog::{CitationDialog, ClipboardSink};
use interview_citation_core::error::{ClipboardError, ConfigError};
use interview_citation_core::params::{read_records, CitationParams};

#[derive(Parser)]
#[command(name = "interview-cite")]
#[command(about = "Chicago-style citations for recorded interviews")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a citation from command-line fields
    Format {
        /// Interview title
        #[arg(long, required = true)]
        title: String,

        /// Participant name (repeatable; the first is credited as author)
        #[arg(long = "participant")]
        participants: Vec<String>,

        /// Recording date (free-form)
        #[arg(long)]
        date: Option<String>,

        /// Recording length in seconds
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<f64>,

        /// Cite as an audio recording
        #[arg(long, conflicts_with = "video")]
        audio: bool,

        /// Cite as a video recording
        #[arg(long)]
        video: bool,

        /// Archive or collection name
        #[arg(long)]
        archive: Option<String>,

        /// Page URL
        #[arg(long)]
        url: Option<String>,

        /// Copy the citation to the terminal clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },

    /// Format citations from a JSON file (record, array of records, or null)
    Render {
        /// Input file, or "-" for stdin
        #[arg(required = true)]
        input: String,

        /// Copy the citation to the terminal clipboard (OSC 52); single record only
        #[arg(long)]
        copy: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize default config file
    Init,
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Key (dot-separated path)
        key: String,
        /// Value
        value: String,
    },
}

/// Clipboard writes through the OSC 52 terminal escape sequence.
struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let payload = base64::engine::general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{}\x07", payload)?;
        self.out.flush()?;
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Format {
            title,
            participants,
            date,
            duration,
            audio,
            video,
            archive,
            url,
            copy,
        } => {
            let cfg = load_config();
            let params = CitationParams {
                interview_title: title.clone(),
                participants: if participants.is_empty() {
                    None
                } else {
                    Some(participants.clone())
                },
                recording_date: date.clone(),
                interview_duration_seconds: *duration,
                is_audio: *audio || (!*video && cfg.defaults.is_audio),
                archive_name: archive.clone().unwrap_or_default(),
                page_url: url.clone().unwrap_or_default(),
            };
            run_records(vec![Some(params)], &cfg, *copy, false, cli.json)
        }
        Commands::Render { input, copy } => run_render(input, *copy, cli.json),
        Commands::Config { action } => run_config(action, cli.json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_render(input: &str, copy: bool, json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let records = if input == "-" {
        read_records(std::io::stdin().lock())?
    } else {
        read_records(std::fs::File::open(input)?)?
    };
    if copy && records.len() != 1 {
        return Err(format!("--copy needs a single record, got {}", records.len()).into());
    }
    let cfg = load_config();
    run_records(records, &cfg, copy, true, json)
}

fn run_records(
    records: Vec<Option<CitationParams>>,
    cfg: &AppConfig,
    copy: bool,
    as_list: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing::debug!("Rendering {} citation record(s)", records.len());
    let mut outputs = Vec::with_capacity(records.len());

    for mut record in records {
        if let Some(params) = record.as_mut() {
            apply_defaults(params, &cfg.defaults);
        }
        let mut dialog = CitationDialog::new(record.as_ref(), dialog_options_from_config(cfg));
        dialog.open();

        let copied = if copy {
            let mut sink = Osc52Clipboard { out: std::io::stderr() };
            dialog.copy(&mut sink, Instant::now())
        } else {
            false
        };

        if json {
            let mut entry = serde_json::json!({
                "citation": dialog.citation(),
                "display": dialog.display_text(),
                "subtitle": dialog.subtitle(),
            });
            if copy {
                entry["copied"] = serde_json::Value::Bool(copied);
            }
            outputs.push(entry);
        } else {
            println!("{}", dialog.display_text());
            if copied {
                eprintln!("{}", dialog.copy_label(Instant::now()));
            }
        }
        dialog.close();
    }

    if json {
        let value = if as_list {
            serde_json::Value::Array(outputs)
        } else {
            outputs.pop().unwrap_or(serde_json::Value::Null)
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

fn run_config(action: &ConfigAction, json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match action {
        ConfigAction::Init => {
            let path = config_path().ok_or(ConfigError::NoConfigDir)?;
            save_config(&AppConfig::default(), &path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Show => {
            let cfg = load_config();
            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else {
                println!("{}", toml::to_string_pretty(&cfg)?);
            }
        }
        ConfigAction::Set { key, value } => {
            let path = config_path().ok_or(ConfigError::NoConfigDir)?;
            let mut cfg = if path.exists() {
                read_config(&path)?
            } else {
                AppConfig::default()
            };

            set_config_key(&mut cfg, key, value)?;
            save_config(&cfg, &path)?;
            if !json {
                println!("Updated {}", key);
            }
        }
    }
    Ok(())
}
