use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::file::UploadedFile;
use super::{FileSlot, FileSlots};
use crate::domain::EncodedDocuments;

/// Reads the whole file and returns its plain base64 text (no `data:` prefix)
pub async fn encode(file: &UploadedFile) -> Result<String> {
    let bytes = file
        .read_bytes()
        .await
        .with_context(|| format!("Failed to encode {}", file.name))?;
    Ok(STANDARD.encode(bytes))
}

/// Encodes every filled slot; empty slots stay absent in the payload
pub async fn process_all(files: &FileSlots) -> Result<EncodedDocuments> {
    let mut documents = EncodedDocuments::default();

    for slot in FileSlot::ALL {
        let Some(file) = files.get(slot) else {
            continue;
        };
        let encoded = encode(file).await?;
        let name = Some(file.name.clone());

        match slot {
            FileSlot::BirthCertificate => {
                documents.birth_certificate = Some(encoded);
                documents.birth_certificate_file_name = name;
            }
            FileSlot::PhotoId => {
                documents.photo_id = Some(encoded);
                documents.photo_id_file_name = name;
            }
            FileSlot::PaymentProof => {
                documents.payment_proof = Some(encoded);
                documents.payment_proof_file_name = name;
            }
        }
    }

    Ok(documents)
}
