pub mod encoder;
pub mod file;
pub mod validator;

pub use encoder::{encode, process_all};
pub use file::{FileData, UploadedFile};
pub use validator::{DEFAULT_MAX_SIZE_MB, FileValidation, validate};

/// The three document slots of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    BirthCertificate,
    PhotoId,
    PaymentProof,
}

impl FileSlot {
    pub const ALL: [FileSlot; 3] = [
        FileSlot::BirthCertificate,
        FileSlot::PhotoId,
        FileSlot::PaymentProof,
    ];

    /// Payload key of the slot
    pub fn field_name(self) -> &'static str {
        match self {
            FileSlot::BirthCertificate => "birthCertificate",
            FileSlot::PhotoId => "photoID",
            FileSlot::PaymentProof => "paymentProof",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlots {
    birth_certificate: Option<UploadedFile>,
    photo_id: Option<UploadedFile>,
    payment_proof: Option<UploadedFile>,
}

impl FileSlots {
    pub fn get(&self, slot: FileSlot) -> Option<&UploadedFile> {
        self.slot(slot).as_ref()
    }

    pub fn set(&mut self, slot: FileSlot, file: UploadedFile) {
        *self.slot_mut(slot) = Some(file);
    }

    pub fn clear(&mut self, slot: FileSlot) -> Option<UploadedFile> {
        self.slot_mut(slot).take()
    }

    pub fn is_empty(&self) -> bool {
        FileSlot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }

    fn slot(&self, slot: FileSlot) -> &Option<UploadedFile> {
        match slot {
            FileSlot::BirthCertificate => &self.birth_certificate,
            FileSlot::PhotoId => &self.photo_id,
            FileSlot::PaymentProof => &self.payment_proof,
        }
    }

    fn slot_mut(&mut self, slot: FileSlot) -> &mut Option<UploadedFile> {
        match slot {
            FileSlot::BirthCertificate => &mut self.birth_certificate,
            FileSlot::PhotoId => &mut self.photo_id,
            FileSlot::PaymentProof => &mut self.payment_proof,
        }
    }
}
