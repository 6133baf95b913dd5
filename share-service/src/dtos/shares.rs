use serde::{Deserialize, Serialize};

use crate::models::{DesignOptions, InvoiceSnapshot};

/// Body of `POST /api/share`. `invoice` is the only required field;
/// `design` may be absent or null and is stored as-is.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SharePayload {
    pub invoice: Option<InvoiceSnapshot>,
    pub design: Option<DesignOptions>,
}

/// Body of a successful `POST /api/share`: the id to embed in the viewer
/// URL (`/invoice/view/{id}`).
#[derive(Debug, Serialize)]
pub struct ShareCreatedResponse {
    pub id: String,
}
