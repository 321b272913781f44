//! Katan diagnostic board dump.
//!
//! Generates a board and prints the color-coded intersection grid, or a JSON
//! snapshot with `--json`. Set `BOARD_SEED` for a reproducible board and
//! `NO_COLOR` to disable ANSI colors.

use katan_core::{render_board, Board, TerrainType};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let board = match std::env::var("BOARD_SEED") {
        Ok(seed) => {
            let seed: u64 = seed.parse()?;
            info!(seed, "generating seeded board");
            Board::standard_with_rng(&mut StdRng::seed_from_u64(seed))?
        }
        Err(_) => Board::standard()?,
    };

    let desert = board
        .tiles()
        .iter()
        .find(|t| t.terrain == TerrainType::Desert);
    info!(
        tiles = board.tiles().len(),
        intersections = board.intersections().count(),
        desert_head = ?desert.map(|t| t.head),
        "board generated"
    );

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    } else {
        let color = std::env::var_os("NO_COLOR").is_none();
        print!("{}", render_board(&board, color));
    }

    Ok(())
}
