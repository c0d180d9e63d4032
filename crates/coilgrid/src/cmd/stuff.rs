use std::io::Read;
use std::path::PathBuf;

use coilgrid_frame::FrameWriter;

use crate::cmd::StuffArgs;
use crate::exit::{frame_error, io_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: StuffArgs) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;

    let stdout = std::io::stdout().lock();
    let mut writer = FrameWriter::new(stdout);
    writer
        .write_frame(&payload)
        .map_err(|err| frame_error("write failed", err))?;

    Ok(SUCCESS)
}

fn resolve_payload(args: &StuffArgs) -> CliResult<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    read_input(args.input.as_ref())
}

fn read_input(path: Option<&PathBuf>) -> CliResult<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err)),
        _ => {
            let mut payload = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut payload)
                .map_err(|err| io_error("failed reading stdin", err))?;
            Ok(payload)
        }
    }
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CliError::new(
            USAGE,
            format!("--hex accepts only hex digits, got {input:?}"),
        ));
    }
    if compact.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            "--hex needs an even number of digits",
        ));
    }

    (0..compact.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&compact[i..i + 2], 16)
                .map_err(|err| CliError::new(USAGE, format!("invalid hex byte: {err}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_spacing() {
        assert_eq!(parse_hex("0b 34 12").unwrap(), vec![0x0b, 0x34, 0x12]);
        assert_eq!(parse_hex("0B3412").unwrap(), vec![0x0b, 0x34, 0x12]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert_eq!(parse_hex("0g").unwrap_err().code, USAGE);
        assert_eq!(parse_hex("abc").unwrap_err().code, USAGE);
    }
}
