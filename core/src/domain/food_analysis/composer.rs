use std::io::Cursor;

use bytes::Bytes;
use image::{ImageFormat, RgbImage};
use tracing::{debug, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::AnalysisRecord, value_objects::AnalysisFindings},
    storage::{
        entities::StoredImage,
        ports::ImageStore,
        services::{PNG_CONTENT_TYPE, image_object_key},
    },
};

pub struct Composed {
    pub record: AnalysisRecord,
    /// Outcome of storing the annotated image. The record is usable either way.
    pub persistence: Result<StoredImage, CoreError>,
}

/// Assembles the record and stores the encoded annotated image under
/// `<record id>.png`. An encoding or storage failure leaves `image_ref`
/// empty; no retries.
#[instrument(skip_all, fields(user = %findings.user, dish = %findings.classification.dish))]
pub async fn compose<IS: ImageStore>(
    image_store: &IS,
    findings: AnalysisFindings,
    png: Result<Bytes, CoreError>,
) -> Composed {
    let mut record = AnalysisRecord::from_findings(findings);

    let persistence = match png {
        Ok(payload) => {
            image_store
                .put_image(&image_object_key(record.id), payload, PNG_CONTENT_TYPE)
                .await
        }
        Err(e) => Err(e),
    };

    if let Ok(stored) = &persistence {
        debug!(
            analysis_id = %record.id,
            reference = %stored.reference,
            size_bytes = stored.size_bytes,
            "Stored annotated image"
        );
        record.image_ref = Some(stored.reference.clone());
    }

    Composed {
        record,
        persistence,
    }
}

pub fn encode_png(image: &RgbImage) -> Result<Bytes, CoreError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CoreError::PersistenceError(format!("failed to encode PNG: {e}")))?;

    Ok(Bytes::from(buffer.into_inner()))
}
