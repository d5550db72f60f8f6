// Rust guideline compliant 2026-10-19

//! Request and response payloads.

use crate::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use lostfound_core::{wire, ItemId, ItemKind, ItemRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One page of `GET /api/admin/all-items`.
///
/// Elements are decoded one at a time so a single malformed record does not
/// cost the rest of the page. `returned` counts every element the backend
/// sent, decodable or not, and is what pagination advances by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminPage {
    /// Records that decoded.
    pub records: Vec<ItemRecord>,
    /// Elements in the response body.
    pub returned: usize,
}

impl AdminPage {
    /// Decodes each element of a listing response, skipping the ones that
    /// are not valid admin records.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        let returned = values.len();
        let records = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let id = value.get("id").cloned();
                match serde_json::from_value::<ItemRecord>(value) {
                    Ok(record) => Some(record),
                    Err(error) => {
                        warn!(index, ?id, %error, "skipping malformed admin record");
                        None
                    }
                }
            })
            .collect();
        Self { records, returned }
    }

    /// Number of elements that failed to decode.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.returned - self.records.len()
    }
}

/// An item as served by the public found/lost listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicItem {
    /// Backend identifier.
    pub id: ItemId,
    /// Short name of the item.
    pub item_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Uploaded image identifier, if any.
    #[serde(
        default,
        deserialize_with = "wire::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_id: Option<String>,
    /// Where the item was lost or found.
    #[serde(default)]
    pub location: String,
    /// Contact information of the reporter.
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub contact_info: String,
    /// When the item was lost or found.
    #[serde(default, with = "wire::opt_timestamp")]
    pub lost_time: Option<DateTime<Utc>>,
    /// When the report was created.
    #[serde(default, with = "wire::opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A visitor report submitted to `/api/report-lost` or `/api/report-found`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReport {
    /// Short name of the item.
    pub item_name: String,
    /// Free-form description.
    pub description: String,
    /// Where the item was lost or found.
    pub location: String,
    /// Reporter contact. Required for lost reports.
    pub contact_info: Option<String>,
    /// When the item was lost or found.
    pub lost_time: DateTime<Utc>,
    /// Previously uploaded image.
    pub image_id: Option<String>,
}

impl ItemReport {
    /// Validates the report before it is sent.
    ///
    /// # Arguments
    ///
    /// * `kind` - Whether this is a lost or found report
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is blank. Contact information is
    /// only required for lost reports.
    pub fn validate(&self, kind: ItemKind) -> Result<()> {
        let required = [
            ("item_name", &self.item_name),
            ("description", &self.description),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ClientError::InvalidRequest(format!(
                    "{} cannot be empty",
                    field
                )));
            }
        }

        let has_contact = self
            .contact_info
            .as_deref()
            .is_some_and(|contact| !contact.trim().is_empty());
        if kind == ItemKind::Lost && !has_contact {
            return Err(ClientError::InvalidRequest(
                "contact_info is required for lost reports".to_string(),
            ));
        }

        Ok(())
    }

    /// Multipart form fields, in submission order. Absent optional fields
    /// are omitted.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("item_name", self.item_name.clone()),
            ("description", self.description.clone()),
            ("location", self.location.clone()),
        ];
        if let Some(contact) = self.contact_info.as_ref().filter(|c| !c.trim().is_empty()) {
            fields.push(("contact_info", contact.clone()));
        }
        fields.push(("lost_time", wire::format_timestamp(&self.lost_time)));
        if let Some(image_id) = self.image_id.as_ref().filter(|id| !id.trim().is_empty() && id.as_str() != "0") {
            fields.push(("image_id", image_id.clone()));
        }
        fields
    }
}

/// Image rendition served by `/api/files/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageVariant {
    /// Reduced-size preview.
    #[default]
    Thumbnail,
    /// Full-size upload.
    Original,
}

impl ImageVariant {
    /// Query value for `image_type`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageVariant::Thumbnail => "thumbnail",
            ImageVariant::Original => "original",
        }
    }
}

/// Response of `POST /api/files/upload`: `{"data": {"id": ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub data: UploadedFile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadedFile {
    #[serde(deserialize_with = "wire::opt_string_or_number")]
    pub id: Option<String>,
}
