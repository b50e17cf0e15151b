use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{fmt, fs, io};

use buxfer_converter::{RowPolicy, Summary, error};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Выгрузка Buxfer (CSV)
    input: PathBuf,

    /// Файл для импорта в ClearCheckbook (CSV)
    output: PathBuf,

    /// Пропускать битые строки вместо того, чтобы прерывать преобразование
    #[arg(long)]
    skip_invalid: bool,

    /// Уровень логирования: off/error/warn/info/debug/trace
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

#[derive(Debug)]
enum Error {
    Usage(String),
    Convert(error::Error),
    IO(String),
}

impl Error {
    fn code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Convert(_) | Self::IO(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{}", msg),
            Self::Convert(err) => write!(f, "{}", err),
            Self::IO(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<error::Error> for Error {
    fn from(value: error::Error) -> Self {
        Error::Convert(value)
    }
}

impl From<error::ParseError> for Error {
    fn from(value: error::ParseError) -> Self {
        Error::Convert(value.into())
    }
}

impl From<error::DumpError> for Error {
    fn from(value: error::DumpError) -> Self {
        Error::Convert(value.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IO(err.to_string())
    }
}

fn open_input(path: &Path) -> Result<fs::File, Error> {
    if !path.is_file() {
        return Err(Error::Usage("Input file does not exist.".to_string()));
    }
    fs::File::open(path).map_err(|err| {
        debug!("open {}: {}", path.display(), err);
        Error::Usage("Input file is not readable.".to_string())
    })
}

// Существующий файл не должен быть read-only; для нового файла проверяется каталог.
fn output_is_writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && !meta.permissions().readonly(),
        Err(_) => {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            fs::metadata(parent)
                .map(|meta| meta.is_dir() && !meta.permissions().readonly())
                .unwrap_or(false)
        }
    }
}

fn run(args: &Args) -> Result<Summary, Error> {
    let mut input_file = open_input(&args.input)?;
    if !output_is_writable(&args.output) {
        return Err(Error::Usage("Output file is not writable.".to_string()));
    }

    let policy = if args.skip_invalid {
        RowPolicy::SkipInvalid
    } else {
        RowPolicy::Strict
    };

    let sources = buxfer_converter::parse_from_buxfer(&mut input_file)?;
    debug!("read {} rows from {}", sources.len(), args.input.display());
    let conversion = buxfer_converter::convert_all(&sources, policy)?;

    let output_file = fs::File::create(&args.output).map_err(|err| {
        debug!("create {}: {}", args.output.display(), err);
        Error::Usage("Output file is not writable.".to_string())
    })?;
    let mut writer = io::BufWriter::new(output_file);
    buxfer_converter::dump_as_clearcheckbook(&mut writer, &conversion.records)?;
    io::Write::flush(&mut writer)?;

    Ok(conversion.summary)
}

fn init_logger(level: LevelFilter) {
    let level = level.to_string().to_lowercase();
    let filter = EnvFilter::new(format!(
        "buxfer_converter={},{}={}",
        level,
        env!("CARGO_CRATE_NAME"),
        level
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help и --version тоже приходят сюда как ошибка
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logger(args.log_level);

    match run(&args) {
        Ok(summary) => {
            debug!("{summary:?}");
            println!("Conversion complete. Check your output file.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("exiting with error: {e:?}");
            eprintln!("Error: {}", e);
            ExitCode::from(e.code())
        }
    }
}
