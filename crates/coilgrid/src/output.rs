use std::io::IsTerminal;

use clap::ValueEnum;
use coilgrid_registry::{DecodedRecord, RegisterMap, Value};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RecordOutput {
    register: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn print_record(record: &DecodedRecord, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = match &record.result {
                Ok(reading) => RecordOutput {
                    register: record.register,
                    name: Some(reading.name),
                    value: Some(value_json(&reading.value)),
                    error: None,
                },
                Err(err) => RecordOutput {
                    register: record.register,
                    name: None,
                    value: None,
                    error: Some(err.to_string()),
                },
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["REGISTER", "NAME", "VALUE"]);
            match &record.result {
                Ok(reading) => table.add_row(vec![
                    format!("0x{:02x}", record.register),
                    reading.name.to_string(),
                    reading.value.to_string(),
                ]),
                Err(err) => table.add_row(vec![
                    format!("0x{:02x}", record.register),
                    "-".to_string(),
                    format!("error: {err}"),
                ]),
            };
            println!("{table}");
        }
        OutputFormat::Pretty => match &record.result {
            Ok(reading) => println!(
                "register=0x{:02x} name={} value={}",
                record.register, reading.name, reading.value
            ),
            Err(err) => println!("register=0x{:02x} error={err}", record.register),
        },
    }
}

#[derive(Serialize)]
struct RegisterRow {
    map: &'static str,
    register: u8,
    name: &'static str,
    #[serde(rename = "type")]
    ty: &'static str,
    width: usize,
}

pub fn print_registers(map: &RegisterMap, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for (id, entry) in map.iter() {
                let row = RegisterRow {
                    map: map.name(),
                    register: id,
                    name: entry.name,
                    ty: entry.ty.label(),
                    width: entry.ty.width(),
                };
                println!(
                    "{}",
                    serde_json::to_string(&row).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "NAME", "TYPE", "WIDTH"]);
            for (id, entry) in map.iter() {
                table.add_row(vec![
                    format!("0x{id:02x}"),
                    entry.name.to_string(),
                    entry.ty.label().to_string(),
                    entry.ty.width().to_string(),
                ]);
            }
            println!("{} registers", map.name());
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (id, entry) in map.iter() {
                println!(
                    "{} 0x{id:02x} {} ({}, {} bytes)",
                    map.name(),
                    entry.name,
                    entry.ty.label(),
                    entry.ty.width()
                );
            }
        }
    }
}

/// JSON rendering of a decoded value: scalars as numbers, bitfields as an
/// object of flag booleans, raw payloads as a byte array.
fn value_json(value: &Value) -> serde_json::Value {
    match value {
        Value::U8(v) => (*v).into(),
        Value::U16(v) => (*v).into(),
        Value::I16(v) => (*v).into(),
        Value::U32(v) => (*v).into(),
        Value::F32(v) => (*v).into(),
        Value::Flags(flags) => {
            let map: serde_json::Map<String, serde_json::Value> = flags
                .iter()
                .map(|(name, set)| (name.to_string(), set.into()))
                .collect();
            map.into()
        }
        Value::Bytes(bytes) => bytes
            .iter()
            .map(|&b| serde_json::Value::from(b))
            .collect::<Vec<_>>()
            .into(),
    }
}
