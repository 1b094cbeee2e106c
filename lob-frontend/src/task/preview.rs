use std::path::PathBuf;

use crate::{error::AppError, event::Preview};

#[tracing::instrument]
pub async fn load(path: PathBuf) -> Result<Preview, AppError> {
    let (width, height) =
        tokio::task::spawn_blocking(move || image::image_dimensions(&path)).await??;

    tracing::trace!("image preview resolved with {}x{}", width, height);

    Ok(Preview::Image { width, height })
}

#[cfg(test)]
mod test {
    use std::{env, fs};

    use image::{ImageBuffer, Rgb};

    use crate::{error::AppError, event::Preview};

    use super::load;

    #[tokio::test]
    async fn load_reads_image_dimensions() {
        let dir = env::temp_dir().join("lob-preview-test");
        fs::create_dir_all(&dir).expect("create scratch dir");

        let path = dir.join(format!("{}.png", rand::random::<u32>()));
        ImageBuffer::from_pixel(3, 2, Rgb([255u8, 0, 0]))
            .save(&path)
            .expect("write image");

        let preview = load(path.clone()).await.expect("preview loads");
        assert_eq!(
            Preview::Image {
                width: 3,
                height: 2
            },
            preview
        );

        let _ = fs::remove_file(path);
    }

    #[tokio::test]
    async fn load_fails_for_broken_image() {
        let dir = env::temp_dir().join("lob-preview-test");
        fs::create_dir_all(&dir).expect("create scratch dir");

        let path = dir.join(format!("{}.png", rand::random::<u32>()));
        fs::write(&path, b"no image").expect("write file");

        let result = load(path.clone()).await;
        assert!(matches!(result, Err(AppError::ImageOperationFailed(_))));

        let _ = fs::remove_file(path);
    }
}
