use dialdex::bench::Benchmark;
use dialdex::store::Store;
use dialdex::{io, report};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(directory), Some(queries)) = (args.next(), args.next()) else {
        eprintln!("usage: dialdex <directory-file> <query-file> [sorted-output-file]");
        return ExitCode::FAILURE;
    };
    let sorted_out = args.next().map(PathBuf::from);

    match run(
        Path::new(&directory),
        Path::new(&queries),
        sorted_out.as_deref(),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dialdex: {err}");
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("  caused by: {source}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(directory: &Path, queries: &Path, sorted_out: Option<&Path>) -> dialdex::Result<()> {
    let entries = io::load_entries(directory)?;
    let queries = io::load_queries(queries)?;

    let benchmark = Benchmark::new(Store::new(entries), queries);
    let reports = benchmark.run();

    for (i, strategy_report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", report::render(strategy_report));
    }

    if let Some(path) = sorted_out {
        io::save_entries(path, &benchmark.quick_sorted())?;
    }

    Ok(())
}
