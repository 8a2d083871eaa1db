use crate::core::GuideImage;
use crate::remote::{RemoteBackend, RemoteRequest, ResourceScope};

/// Reiseführer-Bilder des aktiven Ziels.
#[derive(Debug, Clone, Default)]
pub struct GuideImageStore {
    images: Vec<GuideImage>,
}

impl GuideImageStore {
    pub fn new(images: Vec<GuideImage>) -> Self {
        Self { images }
    }

    pub fn images(&self) -> &[GuideImage] {
        &self.images
    }

    /// Hängt ein hochgeladenes Bild an; die ID ist zeitbasiert und eindeutig.
    pub fn append_url(&mut self, url: String, now_millis: u128) -> &GuideImage {
        let mut candidate = now_millis;
        while self.images.iter().any(|img| img.id == candidate.to_string()) {
            candidate += 1;
        }
        self.images.push(GuideImage::new(candidate.to_string(), url));
        &self.images[self.images.len() - 1]
    }

    pub fn persist(&self, backend: &dyn RemoteBackend, scope: &ResourceScope) -> bool {
        if !scope.is_valid() {
            log::warn!("Reiseführer-Bilder nicht gespeichert: kein Plan ausgewählt");
            return false;
        }
        backend.submit(RemoteRequest::SaveGuideImages {
            scope: scope.clone(),
            images: self.images.clone(),
        });
        true
    }
}
