use std::io::{BufRead, Read, Write};

use anyhow::{bail, Context, Result};

use crate::{basis::Color, canvas::Canvas};

/// 読み込みを許すピクセル数の上限.
pub const MAX_PIXELS: u64 = 1 << 24;

// http://netpbm.sourceforge.net/doc/ppm.html
pub fn write_ppm(canvas: &Canvas, mut out: impl Write) -> Result<()> {
    write!(out, "P6\n{} {}\n255\n", canvas.width(), canvas.height())?;
    let data = canvas
        .pixels()
        .iter()
        .flat_map(|c| c.to_array())
        .collect::<Vec<_>>();
    out.write_all(&data)?;
    out.flush()?;
    Ok(())
}

/// ヘッダの次のトークンを読む. `#` から行末まではコメントとして読み飛ばす.
fn next_token(data: &mut impl BufRead) -> Result<Option<String>> {
    let mut token = String::new();
    let mut byte = [0u8];

    loop {
        if data.read(&mut byte)? == 0 {
            break;
        }
        let c = byte[0] as char;

        if c == '#' && token.is_empty() {
            let mut comment = String::new();
            data.read_line(&mut comment)?;
            continue;
        }

        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }

        if !c.is_ascii() {
            bail!("unexpected non-ascii byte {:#x} in header", byte[0]);
        }
        token.push(c);
    }

    Ok(if token.is_empty() { None } else { Some(token) })
}

fn next_number(data: &mut impl BufRead, what: &str) -> Result<u32> {
    match next_token(data)? {
        Some(s) => s
            .parse()
            .with_context(|| format!("failed to parse {}: {:?}", what, s)),
        None => bail!("expected {}, but found none", what),
    }
}

pub fn read_ppm(mut data: impl BufRead) -> Result<Canvas> {
    // check magic number
    match next_token(&mut data)? {
        Some(m) if m == "P6" => {}
        t => bail!("expected magic number \"P6\", but found {:?}", t),
    };

    let width = next_number(&mut data, "width")?;
    let height = next_number(&mut data, "height")?;
    let max_color_value = next_number(&mut data, "maximum value of color")?;
    if max_color_value != 255 {
        bail!("only 8-bit ppm is supported, but max value is {}", max_color_value);
    }

    let pixel_count = width as u64 * height as u64;
    if pixel_count > MAX_PIXELS {
        bail!(
            "{}x{} exceeds the limit of {} pixels",
            width,
            height,
            MAX_PIXELS
        );
    }

    let mut bytes = vec![0; pixel_count as usize * 3];
    data.read_exact(&mut bytes)
        .context("pixel data is shorter than the header says")?;

    let pixels = bytes
        .chunks(3)
        .map(|c| Color::new(c[0], c[1], c[2]))
        .collect();

    Ok(Canvas::from_pixels(width, height, pixels))
}
