//! Monta Decode - CLI for inspecting API payloads
//!
//! Reads a JSON document, decodes it as one Monta resource and prints the
//! typed record. Charges and wallet transactions can be re-encoded.
//!
//! # Usage
//!
//! ```bash
//! # Decode a charge point from a file
//! monta-decode --entity charge-point --file charge_point.json
//!
//! # Decode a list of charges from stdin
//! curl ... | monta-decode --entity charge --list
//!
//! # Reject wrong-typed fields and print the normalized wire form
//! monta-decode --entity wallet-transaction --file tx.json --strict --encode
//! ```

use std::fmt::Debug;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use monta_models::{
    decode_list, Charge, ChargePoint, DecodeConfig, EncodeConfig, FromWire, ToWire,
    TokenResponse, Wallet, WalletTransaction,
};
use serde_json::Value;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Resource to decode the payload as
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Entity {
    Wallet,
    Charge,
    ChargePoint,
    WalletTransaction,
    Token,
}

/// Decode Monta API payloads into typed records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resource type of the payload
    #[arg(short, long, value_enum)]
    entity: Entity,

    /// JSON file to read (stdin when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Payload is a JSON array of resources
    #[arg(long)]
    list: bool,

    /// Fail on wrong-typed optional fields
    #[arg(long)]
    strict: bool,

    /// Print the re-encoded wire form (charge and wallet-transaction only)
    #[arg(long)]
    encode: bool,

    /// Leave absent fields out of encoded output
    #[arg(long)]
    omit_absent: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Setup logging
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let text = read_input(args.file.as_ref())?;
    let payload: Value = serde_json::from_str(&text)?;
    debug!("Read {} bytes of JSON", text.len());

    let decode = DecodeConfig::new().with_strict_types(args.strict);
    let encode = if args.omit_absent {
        EncodeConfig::new().omit_absent()
    } else {
        EncodeConfig::new()
    };

    info!("Decoding payload as {:?}", args.entity);

    match args.entity {
        Entity::Wallet => print_records::<Wallet>(&payload, &args, &decode),
        Entity::ChargePoint => print_records::<ChargePoint>(&payload, &args, &decode),
        Entity::Token => print_records::<TokenResponse>(&payload, &args, &decode),
        Entity::Charge if args.encode => print_encoded::<Charge>(&payload, &args, &decode, &encode),
        Entity::Charge => print_records::<Charge>(&payload, &args, &decode),
        Entity::WalletTransaction if args.encode => {
            print_encoded::<WalletTransaction>(&payload, &args, &decode, &encode)
        }
        Entity::WalletTransaction => print_records::<WalletTransaction>(&payload, &args, &decode),
    }
}

/// Read the whole payload from a file or stdin
fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn decode_records<T: FromWire>(
    payload: &Value,
    args: &Args,
    config: &DecodeConfig,
) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    if args.list {
        let items = payload
            .as_array()
            .ok_or("--list expects a JSON array")?;
        Ok(decode_list(items, config)?)
    } else {
        Ok(vec![T::from_value_with(payload, config)?])
    }
}

fn print_records<T: FromWire + Debug>(
    payload: &Value,
    args: &Args,
    config: &DecodeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.encode {
        return Err(format!("--encode is not supported for {:?}", args.entity).into());
    }

    for record in decode_records::<T>(payload, args, config)? {
        println!("{:#?}", record);
    }
    Ok(())
}

fn print_encoded<T: FromWire + ToWire>(
    payload: &Value,
    args: &Args,
    decode: &DecodeConfig,
    encode: &EncodeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded: Vec<Value> = decode_records::<T>(payload, args, decode)?
        .iter()
        .map(|record| Value::Object(record.to_map_with(encode)))
        .collect();

    let output = if args.list {
        Value::Array(encoded)
    } else {
        encoded.into_iter().next().unwrap_or(Value::Null)
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
