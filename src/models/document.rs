// 3rd party crates
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Current module imports
use super::enums::{CertificateDocument, DocumentFormat, DocumentType, ProductionType, UsageType};

/// A goods introduction document as it goes over the wire.
///
/// Every field is optional at the type level: a missing field is something
/// the validator rejects, not something decoding should fail on. Absent
/// fields are left out of the serialized body and dates are written as
/// `yyyy-MM-dd`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<UsageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_format: Option<DocumentFormat>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocumentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_date: Option<NaiveDate>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produced: Option<Produced>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document: Option<CertificateDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_document_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tnved_code: Option<String>,
}

/// Producer details, required for locally produced goods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produced {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer_inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_type: Option<ProductionType>,
}

/// Customs declaration details, required for imported goods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customs_code: Option<String>,
    #[serde(default)]
    pub decision_code: i64,
}
