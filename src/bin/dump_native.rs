use anyhow::Result;

use gecko_sprite::{ppm, sprite};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let canvas = sprite::render_native();

    let stdout = std::io::stdout();
    let handle = stdout.lock();
    ppm::write_ppm(&canvas, handle)?;
    Ok(())
}
