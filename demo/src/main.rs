mod demo_config;

use clap::Parser;
use grid_tictactoe::{Board, Cell, Mark, log, logger};

use demo_config::{DEFAULT_CONFIG_FILE_NAME, DemoConfig, get_config_manager};

#[derive(Parser)]
#[command(name = "grid_tictactoe_demo")]
struct Args {
    /// YAML file with the board size and the moves to play.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the built-in demo config to `--config` before running.
    #[arg(long)]
    write_default_config: bool,
}

fn format_board(rows: &[Vec<Cell<Mark>>]) -> String {
    let mut output = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(Cell::to_string).collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}

fn play(config: &DemoConfig) -> Result<Board<Mark>, String> {
    let mut board = config.board.build::<Mark>()?;
    for scripted in &config.moves {
        if !board.apply_move(scripted.row, scripted.col, scripted.mark) {
            log!(
                "Move {} at ({}, {}) rejected",
                scripted.mark,
                scripted.row,
                scripted.col
            );
        }
    }
    Ok(board)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Demo".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    if args.write_default_config {
        config_manager.set_config(&DemoConfig::default())?;
        log!("Default config written to {}", args.config);
    }
    let config = config_manager.get_config()?;

    log!(
        "Playing {} moves on a {}x{} board",
        config.moves.len(),
        config.board.rows,
        config.board.columns
    );

    let board = play(&config)?;
    println!("{}", format_board(&board.render()));

    if !board.is_game_over() {
        log!("Game still in progress.");
    }

    Ok(())
}
