use thiserror::Error;

use crate::shopify::models::{ImagePayload, MetafieldPayload, ProductPayload, VariantPayload};
use crate::storage::SourceRecord;

/// Fehler bei der Record → Produkt Transformation
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("Record has no usable rate")]
    MissingRate,
}

/// Baue Shopify Produkt Payload aus einem Source Record.
/// rate ist das einzige Pflichtfeld; alles andere bekommt Defaults
/// oder wird weggelassen.
pub fn build_product(record: &SourceRecord) -> Result<ProductPayload, TransformError> {
    let price = record
        .rate
        .filter(|rate| rate.is_finite())
        .ok_or(TransformError::MissingRate)?;

    let inventory_quantity = record
        .stock
        .filter(|stock| stock.is_finite())
        .map(|stock| stock.trunc() as i64);

    let variant = VariantPayload {
        price: price.to_string(),
        sku: record.barcode.clone().filter(|barcode| !barcode.is_empty()),
        inventory_quantity,
        inventory_management: inventory_quantity.map(|_| "shopify".to_string()),
        compare_at_price: record
            .mrp
            .filter(|mrp| mrp.is_finite())
            .map(|mrp| mrp.to_string()),
    };

    let tags = match &record.sub_category {
        Some(sub_category) if !sub_category.is_empty() => vec![sub_category.clone()],
        _ => Vec::new(),
    };

    let images = record
        .images
        .iter()
        .map(|src| ImagePayload { src: src.clone() })
        .collect();

    Ok(ProductPayload {
        title: text_or(&record.name, "Untitled Product"),
        body_html: String::new(),
        vendor: text_or(&record.supplier, "Unknown"),
        product_type: text_or(&record.group, ""),
        tags,
        variants: vec![variant],
        images,
    })
}

/// Baue Metafields; nur Felder mit nicht-leerem Wert werden angelegt
pub fn build_metafields(record: &SourceRecord) -> Vec<MetafieldPayload> {
    let mut metafields = Vec::new();

    if let Some(brand) = text_field(&record.brand) {
        metafields.push(MetafieldPayload::text("brand", brand));
    }
    if let Some(suppdate) = text_field(&record.suppdate) {
        metafields.push(MetafieldPayload::text("suppdate", suppdate));
    }
    if let Some(suppinvo) = text_field(&record.suppinvo) {
        metafields.push(MetafieldPayload::text("suppinvo", suppinvo));
    }
    if let Some(value) = record.value.filter(|v| v.is_finite() && *v != 0.0) {
        metafields.push(MetafieldPayload::integer("value", value.trunc() as i64));
    }

    metafields
}

// Leere Strings zählen wie fehlende Felder
fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

fn text_field(value: &Option<String>) -> Option<String> {
    value.clone().filter(|text| !text.is_empty())
}
