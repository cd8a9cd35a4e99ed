//! Document analysis result shape.
//!
//! The shape is requested from the model by prompt convention and is not
//! enforced: parsing here is best-effort, and callers fall back to
//! displaying the raw response when it does not parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Supported document types and the fields extracted for each.
///
/// Shown by `govdoc types` and in the web sidebar; the authoritative
/// enumeration lives in the instruction prompt.
pub const DOCUMENT_TYPES: &[(&str, &[&str])] = &[
    (
        "Aadhaar Card",
        &["name", "dob", "gender", "aadhaar_number", "address"],
    ),
    (
        "PAN Card",
        &["name", "father's name", "dob", "pan number", "signature"],
    ),
    (
        "Passport",
        &[
            "name",
            "passport_number",
            "dob",
            "nationality",
            "issue_date",
            "expiry_date",
        ],
    ),
    (
        "Driving License",
        &["name", "license_number", "dob", "issue_date", "validity"],
    ),
    (
        "Marksheet",
        &[
            "roll no",
            "exam_type",
            "certificate_number",
            "candidate name",
            "subjects",
            "result",
        ],
    ),
    (
        "Invoice",
        &[
            "invoice_number",
            "date",
            "seller_name",
            "buyer_name",
            "items",
            "total_amount",
            "tax_amount",
        ],
    ),
    (
        "Contract",
        &[
            "contract_id",
            "parties_involved",
            "start_date",
            "end_date",
            "key_terms",
        ],
    ),
    (
        "Voter ID",
        &[
            "name",
            "father_name",
            "dob",
            "gender",
            "voter_id_number",
            "address",
        ],
    ),
    (
        "Birth Certificate",
        &[
            "child_name",
            "father_name",
            "mother_name",
            "dob",
            "place_of_birth",
            "registration_number",
        ],
    ),
    (
        "Property Registration",
        &[
            "owner_name",
            "property_address",
            "registration_number",
            "date_of_registration",
            "registrar_office",
        ],
    ),
    (
        "Tax Return",
        &[
            "taxpayer_name",
            "pan_number",
            "assessment_year",
            "income",
            "tax_paid",
            "refund_status",
        ],
    ),
    (
        "Income Certificate",
        &[
            "certificate_number",
            "applicant_name",
            "father's_name",
            "address",
            "annual_income",
            "issue_date",
            "validity",
            "issuing_authority",
        ],
    ),
];

/// Structured analysis of a document, as reported by the model.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentAnalysis {
    /// Detected document type (e.g. "Aadhaar Card"), or "error"/"text".
    #[serde(default)]
    pub document_type: String,
    /// Extracted fields; shape varies per document type.
    #[serde(default)]
    pub extracted_data: Value,
    /// Categorical compliance label based on field completeness.
    #[serde(default)]
    pub compliance_status: String,
}

impl DocumentAnalysis {
    /// Whether the analysis is the synthetic error shape produced when
    /// the remote call failed.
    pub fn is_error(&self) -> bool {
        self.document_type == "error"
    }
}

/// Parse a raw model response into a [`DocumentAnalysis`].
///
/// Accepts both the flat shape and the `properties`-wrapped shape the
/// prompt requests (models emit both in practice). Returns `None` when
/// the response is not JSON; the caller then shows the raw text.
pub fn parse_analysis(raw: &str) -> Option<DocumentAnalysis> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let obj = value.as_object()?;

    // Wrapped shape: {"properties": {"document_type": .., "extracted_data": ..},
    //                 "compliance_status": ..}
    if let Some(props) = obj.get("properties").and_then(Value::as_object) {
        return Some(DocumentAnalysis {
            document_type: props
                .get("document_type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            extracted_data: props.get("extracted_data").cloned().unwrap_or(Value::Null),
            compliance_status: obj
                .get("compliance_status")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }

    serde_json::from_value(value).ok()
}

/// Render a raw model response for display: pretty-printed when it
/// parses as JSON, verbatim otherwise. Never fails; this is the single
/// place the display fallback rule lives.
pub fn pretty_or_raw(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}
