use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use coilgrid_frame::{FrameError, FrameReader, FrameSplitter};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let catalog = args.map.catalog();
    let source = open_input(args.input.as_ref())?;
    let splitter = FrameSplitter::with_max_frame(args.max_frame);
    let mut reader = FrameReader::with_splitter(source, splitter);

    let mut printed = 0usize;
    loop {
        if let Some(count) = args.count {
            if printed >= count {
                break;
            }
        }

        let frame = match reader.read_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => break,
            Err(FrameError::Io(err)) => return Err(io_error("read failed", err)),
            Err(err) => {
                if args.strict {
                    return Err(frame_error("corrupt frame", err));
                }
                tracing::warn!(%err, "skipping corrupt frame");
                continue;
            }
        };

        match catalog.decode(&frame) {
            Some(record) => {
                print_record(&record, format);
                printed += 1;
            }
            None => {
                tracing::debug!(len = frame.len(), "skipping undersized frame");
            }
        }
    }

    Ok(SUCCESS)
}

fn open_input(path: Option<&PathBuf>) -> CliResult<Box<dyn Read>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(std::io::stdin().lock())),
    }
}
