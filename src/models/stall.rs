use serde::{Deserialize, Serialize};

/// A food stall as the backend reports it. Scores are server-side aggregates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stall {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub water_quality_score: f64,
    #[serde(default)]
    pub masks_score: f64,
    #[serde(default)]
    pub gloves_score: f64,
    #[serde(default)]
    pub cleanliness_score: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
}

impl Stall {
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// "area, city" as shown on cards.
    pub fn locality(&self) -> String {
        format!("{}, {}", self.area, self.city)
    }

    /// "address, area, city" as shown on the detail page.
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.area, self.city)
    }

    /// The four rated dimensions in display order.
    pub fn dimensions(&self) -> [(&'static str, f64); 4] {
        [
            ("Water Quality", self.water_quality_score),
            ("Masks", self.masks_score),
            ("Gloves", self.gloves_score),
            ("Cleanliness", self.cleanliness_score),
        ]
    }
}

/// Body of `POST /stalls`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewStall {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub area: String,
    pub photos: Vec<String>,
}

impl NewStall {
    /// Trims every text field and reports the first one left empty.
    pub fn normalized(self) -> Result<Self, &'static str> {
        let stall = Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            area: self.area.trim().to_string(),
            photos: self.photos,
        };
        let required = [
            ("Name", &stall.name),
            ("Description", &stall.description),
            ("Address", &stall.address),
            ("City", &stall.city),
            ("Area", &stall.area),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(field),
            None => Ok(stall),
        }
    }
}

/// Response of `POST /upload-photo`: the photo as a data URL.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UploadedPhoto {
    pub url: String,
}

/// Response of `GET /qrcode/:id`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct QrCode {
    pub qr_code: String,
    pub stall: Stall,
}

impl QrCode {
    pub fn download_name(&self) -> String {
        format!("hygiene-qr-{}.png", self.stall.name)
    }
}
