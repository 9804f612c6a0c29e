use clap::{Parser, Subcommand};
use data_encoding::HEXUPPER_PERMISSIVE;
use dnsp_record_domain::{CliOverrides, NameEncoding, RecordType};
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "dnsp-record")]
#[command(version)]
#[command(about = "Encode and decode DNS Server Management Protocol records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Name layout inside payloads (labels, rpc-name)
    #[arg(long, value_name = "ENCODING", global = true)]
    name_encoding: Option<NameEncoding>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a record from rdata text
    Encode {
        /// Record type mnemonic or TYPEnnn
        #[arg(short = 't', long = "type")]
        record_type: RecordType,

        /// Time to live in seconds
        #[arg(long, default_value_t = 3600)]
        ttl: u32,

        /// Record data in presentation format
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        rdata: Vec<String>,
    },

    /// Build a record from a zone line: owner [ttl] [class] type rdata
    EncodeLine {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Decode a hex-encoded record
    Decode {
        hex: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        name_encoding: cli.name_encoding,
        default_ttl: None,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let use_cases = di::UseCases::new(&config);

    let rendered = match cli.command {
        Command::Encode {
            record_type,
            ttl,
            rdata,
        } => {
            let record = use_cases
                .new_from_text
                .execute(record_type, ttl, &rdata.join(" "))?;
            info!(
                record_type = %record.record_type,
                data_length = record.data_length,
                "Record encoded"
            );
            output::render_encoded(record, cli.json)?
        }
        Command::EncodeLine { line } => {
            let record = use_cases.new_from_text.execute_line(&line.join(" "))?;
            info!(
                record_type = %record.record_type,
                data_length = record.data_length,
                "Zone line encoded"
            );
            output::render_encoded(record, cli.json)?
        }
        Command::Decode { hex } => {
            let compact: String = hex.split_whitespace().collect();
            let bytes = HEXUPPER_PERMISSIVE
                .decode(compact.as_bytes())
                .map_err(|e| anyhow::anyhow!("Invalid hex input: {}", e))?;
            let record = use_cases.decode.execute(&bytes)?;
            info!(record_type = %record.record_type, "Record decoded");
            output::render_decoded(&record, cli.json)?
        }
    };

    println!("{}", rendered);
    Ok(())
}
