use std::path::PathBuf;

use clap::{Parser, Subcommand};
use master_unit_converter::{
    app, config, logging, ui_cli, ConversionRequest, Converter, FormatPolicy, UnitTable,
};

/// 엔지니어링 단위 변환기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "master_unit_converter_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 결과 표시 소수 자릿수 (설정 파일보다 우선)
    #[arg(long, global = true)]
    decimals: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 카테고리 목록을 출력한다
    Categories,
    /// 카테고리의 단위 목록을 출력한다
    Units { category: String },
    /// 값을 변환한다. 대상 단위를 생략하면 목록의 두 번째 단위를 쓴다
    Convert {
        category: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: Option<String>,
    },
    /// 적용 중인 설정을 TOML 로 출력한다
    Config,
    /// 대화형 모드 (기본값)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    logging::init_logging("warn");
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_from(&cli.config)?;
    if let Some(decimals) = cli.decimals {
        cfg.format = FormatPolicy {
            group_thousands: cfg.format.group_thousands,
            ..FormatPolicy::with_decimals(decimals)
        };
    }
    let table = UnitTable::standard();
    let converter = Converter::new(table);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Categories => {
            for name in table.categories() {
                println!("{name}");
            }
        }
        Command::Units { category } => {
            for unit in table.units_for(&category)? {
                println!("{unit}");
            }
        }
        Command::Convert {
            category,
            value,
            from,
            to,
        } => {
            let to = match to {
                Some(to) => to,
                None => table.default_units(&category)?.1.to_string(),
            };
            let request = ConversionRequest::new(category, value, from, to);
            let result = converter.convert_request(&request, &cfg.format)?;
            println!("{}", ui_cli::render_result(&result));
        }
        Command::Config => print!("{}", cfg.to_toml_string()?),
        Command::Interactive => app::run(&cfg, &converter)?,
    }
    Ok(())
}
