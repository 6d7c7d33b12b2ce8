mod error;
mod job;

use std::io::Read;
use std::process::ExitCode;
use std::{env, fs, io};

use crate::error::CliError;
use crate::job::Job;

fn read_job() -> Result<String, CliError> {
    let mut args = env::args().skip(1);
    let path = args.next();
    if args.next().is_some() {
        return Err(CliError::Usage("cipher-cli [JOB_FILE]".into()));
    }

    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run() -> Result<String, CliError> {
    let job = Job::from_json(&read_job()?)?;
    log::info!("running {} job mod {}", job.name(), job.modulus());
    job.run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
