use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use coilgrid_frame::DEFAULT_MAX_FRAME;
use coilgrid_registry::{RegisterMap, MASTER, TILE};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod registers;
pub mod stuff;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a byte-stuffed capture into register records.
    Decode(DecodeArgs),
    /// Byte-stuff a payload and emit the delimited frame.
    Stuff(StuffArgs),
    /// List the register catalogs.
    Registers(RegistersArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Stuff(args) => stuff::run(args),
        Command::Registers(args) => registers::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Which register catalog to decode against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MapChoice {
    Tile,
    Master,
}

impl MapChoice {
    pub fn catalog(self) -> &'static RegisterMap {
        match self {
            Self::Tile => &TILE,
            Self::Master => &MASTER,
        }
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Capture file to read ('-' or absent for stdin).
    pub input: Option<PathBuf>,
    /// Register catalog to decode against.
    #[arg(long, value_enum, default_value_t = MapChoice::Tile)]
    pub map: MapChoice,
    /// Stop after N records.
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,
    /// Abort on framing corruption instead of resynchronizing.
    #[arg(long)]
    pub strict: bool,
    /// Maximum wire bytes buffered per frame.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_FRAME)]
    pub max_frame: usize,
}

#[derive(Args, Debug)]
pub struct StuffArgs {
    /// Payload file to read ('-' or absent for stdin).
    pub input: Option<PathBuf>,
    /// Hex payload given inline instead of a file.
    #[arg(long, value_name = "HEX", conflicts_with = "input")]
    pub hex: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegistersArgs {
    /// Limit the listing to one catalog.
    #[arg(long, value_enum)]
    pub map: Option<MapChoice>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
