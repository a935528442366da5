use image::{RgbImage, imageops::FilterType};

use crate::domain::{
    classification::ports::{ImageTensor, MODEL_INPUT_SIZE},
    common::entities::app_errors::CoreError,
};

/// Decodes JPEG/PNG bytes into a 3-channel image.
pub fn decode_image(data: &[u8]) -> Result<RgbImage, CoreError> {
    let image = image::load_from_memory(data).map_err(|e| {
        tracing::debug!(error = %e, size = data.len(), "Failed to decode image");
        CoreError::InvalidImage(e.to_string())
    })?;

    if image.width() == 0 || image.height() == 0 {
        return Err(CoreError::InvalidImage("image has no pixels".to_string()));
    }

    Ok(image.to_rgb8())
}

/// Resizes to the model grid and scales pixels into `[0, 1]`.
pub fn to_model_input(image: &RgbImage) -> Result<ImageTensor, CoreError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(CoreError::InvalidImage(
            "cannot resize an empty image".to_string(),
        ));
    }

    let resized = image::imageops::resize(
        image,
        MODEL_INPUT_SIZE,
        MODEL_INPUT_SIZE,
        FilterType::CatmullRom,
    );

    let data = resized
        .into_raw()
        .into_iter()
        .map(|value| f32::from(value) / 255.0)
        .collect();

    let side = MODEL_INPUT_SIZE as usize;
    Ok(ImageTensor {
        shape: [1, side, side, 3],
        data,
    })
}
