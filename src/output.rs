use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};

use crate::{basis::Pos, canvas::Canvas};

/// `canvas` を 8 ビット RGB の画像に変換する.
pub fn to_rgb_image(canvas: &Canvas) -> RgbImage {
    ImageBuffer::from_fn(canvas.width(), canvas.height(), |x, y| {
        Rgb::from(canvas[Pos::new(x as i32, y as i32)])
    })
}

/// `canvas` を PNG として `path` に書き出す. 既存のファイルは上書きする.
///
/// 親ディレクトリは作らないので, 存在しなければエラーになる.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    to_rgb_image(canvas)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write sprite to {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BACKGROUND, SKIN};

    #[test]
    fn image_keeps_pixels() {
        let mut canvas = Canvas::new(3, 2, BACKGROUND);
        canvas.set_pixel(Pos::new(2, 1), SKIN);

        let image = to_rgb_image(&canvas);
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgb::from(SKIN));
        assert_eq!(image.get_pixel(0, 0), &Rgb::from(BACKGROUND));
    }
}
