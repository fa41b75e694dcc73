#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

mod common;
mod derive;
mod encode;
mod error;
mod logging;
mod output;
mod stats;
mod tables;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use crate::error::Result;
use crate::stats::PropertyStats;
use crate::tables::{categories, scripts, PropertyTable};

/// Собирает таблицы диапазонов кодпоинтов по категориям, письменностям и
/// POSIX-классам из файлов Unicode Character Database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args
{
    /// UnicodeData.txt
    #[arg(long, env = "UCD_UNICODE_DATA")]
    unicode_data: PathBuf,

    /// Scripts.txt; без него таблицы письменностей не собираются
    #[arg(long, env = "UCD_SCRIPTS")]
    scripts: Option<PathBuf>,

    #[arg(long, default_value = "./data/name2ctype.h", env = "UCD_OUTPUT")]
    output: PathBuf,

    /// файл статистики по свойствам
    #[arg(long, env = "UCD_STATS")]
    stats: Option<PathBuf>,

    #[arg(long, default_value_t = true, env = "UCD_LOG_PRETTY")]
    pretty_logs: bool,
}

fn main() -> ExitCode
{
    let args = Args::parse();

    logging::setup_logging(args.pretty_logs);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "build failed, nothing written");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()>
{
    let mut table = PropertyTable::new();

    let source = common::read_source(&args.unicode_data)?;
    let records = categories::parse_unicode_data(&source)?;
    let stage = categories::build(&records)?;

    info!(records = records.len(), properties = stage.len(), "built categories");

    table.merge(stage)?;
    table.verify_partition()?;

    if let Some(path) = &args.scripts {
        let source = common::read_source(path)?;
        let records = scripts::parse_scripts(&source)?;
        let stage = scripts::build(&records);

        info!(records = records.len(), scripts = stage.len(), "built scripts");

        table.merge(stage)?;
    }

    derive::derive_all(&mut table)?;

    let encoded = encode::encode_table(&table)?;
    let stats = PropertyStats::collect(&encoded);

    output::write_properties(&args.output, &encoded)?;

    info!(
        properties = stats.total(),
        output = %args.output.display(),
        "tables written"
    );

    if let Some(path) = &args.stats {
        output::write_stats(path, &stats)?;
    }

    Ok(())
}
