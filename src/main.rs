use anyhow::Result;

use gecko_sprite::{output, sprite};

/// クレートのディレクトリを基準にした出力先. 実行時のカレントディレクトリには依存しない.
const OUTPUT_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/public/images/gecko-sprite.png"
);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let canvas = sprite::render();
    output::save_png(&canvas, OUTPUT_PATH)?;

    println!(
        "Saved {}x{} to {}",
        canvas.width(),
        canvas.height(),
        OUTPUT_PATH
    );
    Ok(())
}
