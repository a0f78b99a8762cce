use image::imageops::{self, FilterType};
use image::ImageFormat;
use ndarray::Array4;

use super::error::ClassifierError;
use crate::models::ModelCharacteristics;

/// Fixed normalization pipeline turning raw JPEG bytes into the tensor the
/// classification graph expects.
///
/// Built once per classifier from the model's characteristics, applied
/// once per run. The steps, in order:
/// 1. decode the bytes as a 3-channel JPEG
/// 2. cast pixels to f32
/// 3. insert a leading batch dimension of size 1
/// 4. bilinear-resize to `input_size` x `input_size`, ignoring aspect ratio
/// 5. subtract the scalar channel mean (on the 0..=255 scale)
#[derive(Debug, Clone)]
pub struct Preprocessor {
    input_size: u32,
    channel_mean: f32,
}

impl Preprocessor {
    pub fn new(characteristics: &ModelCharacteristics) -> Self {
        Self {
            input_size: characteristics.input_size,
            channel_mean: characteristics.channel_mean,
        }
    }

    /// Decodes and normalizes one image into a `[1, size, size, 3]` tensor.
    ///
    /// # Errors
    /// - `DecodeError` if the bytes are not a decodable JPEG
    pub fn normalize(&self, image_bytes: &[u8]) -> Result<Array4<f32>, ClassifierError> {
        let decoded = image::load_from_memory_with_format(image_bytes, ImageFormat::Jpeg)
            .map_err(|e| ClassifierError::DecodeError(e.to_string()))?;

        // Cast before resizing so interpolation runs on float pixels.
        // Float images are unit-scaled, so the mean shift below happens on
        // the 0..=255 scale instead.
        let float = decoded.to_rgb32f();

        let size = self.input_size;
        let resized = imageops::resize(&float, size, size, FilterType::Triangle);

        let mean = self.channel_mean;
        let batch = Array4::from_shape_fn((1, size as usize, size as usize, 3), |(_, y, x, c)| {
            resized.get_pixel(x as u32, y as u32).0[c] * 255.0 - mean
        });

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BuiltinModel;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn inception_preprocessor() -> Preprocessor {
        Preprocessor::new(&BuiltinModel::Inception.characteristics())
    }

    fn encode_jpeg(image: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, ImageFormat::Jpeg)
            .expect("Failed to encode test JPEG");
        buf.into_inner()
    }

    #[test]
    fn test_output_shape_is_batched() {
        let jpeg = encode_jpeg(&RgbImage::from_pixel(64, 48, Rgb([10, 20, 30])));
        let tensor = inception_preprocessor().normalize(&jpeg).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn test_solid_color_normalizes_to_shifted_channels() {
        let jpeg = encode_jpeg(&RgbImage::from_pixel(32, 32, Rgb([200, 117, 40])));
        let tensor = inception_preprocessor().normalize(&jpeg).unwrap();

        // JPEG is lossy; a solid color survives within a few counts.
        let tolerance = 6.0;
        assert!((tensor[[0, 0, 0, 0]] - 83.0).abs() < tolerance);
        assert!((tensor[[0, 0, 0, 1]] - 0.0).abs() < tolerance);
        assert!((tensor[[0, 112, 112, 2]] - (40.0 - 117.0)).abs() < tolerance);
    }

    #[test]
    fn test_values_stay_in_normalized_range() {
        let jpeg = encode_jpeg(&RgbImage::from_fn(50, 30, |x, y| {
            Rgb([(x * 5) as u8, (y * 8) as u8, 255])
        }));
        let tensor = inception_preprocessor().normalize(&jpeg).unwrap();
        assert!(tensor.iter().all(|&v| (-117.0..=138.0).contains(&v)));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = inception_preprocessor().normalize(b"definitely not a jpeg");
        assert!(matches!(result, Err(ClassifierError::DecodeError(_))));
    }

    #[test]
    fn test_png_bytes_fail_to_decode() {
        let image = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();

        let result = inception_preprocessor().normalize(&buf.into_inner());
        assert!(matches!(result, Err(ClassifierError::DecodeError(_))));
    }

    #[test]
    fn test_empty_input_fails_to_decode() {
        let result = inception_preprocessor().normalize(&[]);
        assert!(matches!(result, Err(ClassifierError::DecodeError(_))));
    }
}
