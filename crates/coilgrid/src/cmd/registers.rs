use coilgrid_registry::{MASTER, TILE};

use crate::cmd::RegistersArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_registers, OutputFormat};

pub fn run(args: RegistersArgs, format: OutputFormat) -> CliResult<i32> {
    match args.map {
        Some(choice) => print_registers(choice.catalog(), format),
        None => {
            print_registers(&TILE, format);
            print_registers(&MASTER, format);
        }
    }
    Ok(SUCCESS)
}
