use std::env;
use std::process::ExitCode;

use log::{error, LevelFilter};

use um::config::Cli;
use um::error::{CliError, VmError};
use um::io::StdIoPort;
use um::loader::load_program;
use um::vm::Vm;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    match run(env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cli(err)) => {
            error!("{err}");
            ExitCode::from(cli_exit_code(&err))
        }
        Err(Error::Vm(err)) => {
            error!("{err}");
            ExitCode::from(vm_exit_code(&err))
        }
    }
}

enum Error {
    Cli(CliError),
    Vm(VmError),
}

impl From<CliError> for Error {
    fn from(err: CliError) -> Self {
        Error::Cli(err)
    }
}

impl From<VmError> for Error {
    fn from(err: VmError) -> Self {
        Error::Vm(err)
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), Error> {
    let cli = Cli::parse(args)?;
    let program = load_program(&cli.program_path)?;
    let mut vm = Vm::new(program, StdIoPort::new());
    vm.run()?;
    Ok(())
}

fn cli_exit_code(err: &CliError) -> u8 {
    match err {
        CliError::Usage => 64,           // EX_USAGE
        CliError::OpenFile { .. } => 66, // EX_NOINPUT
    }
}

fn vm_exit_code(err: &VmError) -> u8 {
    match err {
        VmError::BitOverflow { .. } => 70, // EX_SOFTWARE
        VmError::DivisionByZero => 70,
        VmError::UnknownOpcode(_) => 70,
        VmError::Io(_) => 74, // EX_IOERR
    }
}
