mod config;
mod logging;
mod models;
mod ui;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::models::evaluate;
use crate::ui::{App, render};

/// BMI 计算器
#[derive(Debug, Parser)]
#[command(name = "bmi-card", version, about = "Body-mass-index calculator")]
struct Cli {
    /// 体重 (kg)，与 --height 一起使用时直接输出结果
    #[arg(long, requires = "height", allow_hyphen_values = true)]
    mass: Option<String>,

    /// 身高 (m)
    #[arg(long, requires = "mass", allow_hyphen_values = true)]
    height: Option<String>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing();

    if let (Some(mass), Some(height)) = (&cli.mass, &cli.height) {
        return Ok(ExitCode::from(run_once(mass, height)));
    }

    let config_path = cli.config.unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path).context("failed to load configuration")?;

    let mut app = App::new(config.palette);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(ExitCode::SUCCESS)
}

/// 无界面模式：计算一次并输出，返回进程退出码
fn run_once(mass: &str, height: &str) -> u8 {
    match evaluate(mass, height) {
        Ok(result) => {
            tracing::info!(index = result.index, category = result.category.tag(), "evaluated");
            println!("{}", result);
            0
        }
        Err(err) => {
            eprintln!("{}", err);
            2
        }
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press && ui::handle_key_event(app, key.code)? {
                break;
            }
        }
    }
    Ok(())
}
