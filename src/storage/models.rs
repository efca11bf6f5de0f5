use chrono::{DateTime, Utc};

/// Produkt-Record aus der Quell-Collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord {
    /// Dokument-Id (letztes Segment des Firestore Resource Namens)
    pub id: String,
    pub name: Option<String>,
    pub supplier: Option<String>,
    pub group: Option<String>,
    pub sub_category: Option<String>,
    pub rate: Option<f64>,
    pub barcode: Option<String>,
    pub stock: Option<f64>,
    pub mrp: Option<f64>,
    pub images: Vec<String>,
    pub brand: Option<String>,
    pub suppdate: Option<String>,
    pub suppinvo: Option<String>,
    pub value: Option<f64>,
    /// Gesetzt sobald das Produkt nach Shopify migriert wurde
    pub shopify_id: Option<String>,
}

impl SourceRecord {
    /// Record gilt als migriert wenn bereits eine Shopify-Id hinterlegt ist
    pub fn is_migrated(&self) -> bool {
        self.shopify_id.as_ref().is_some_and(|id| !id.is_empty())
    }
}

/// Marker der nach erfolgreichem Anlegen zurückgeschrieben wird
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationMarker {
    pub shopify_id: String,
    pub migrated_at: DateTime<Utc>,
}

impl MigrationMarker {
    pub fn new(shopify_id: String) -> Self {
        Self {
            shopify_id,
            migrated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_migrated() {
        let mut record = SourceRecord::default();
        assert!(!record.is_migrated());

        record.shopify_id = Some(String::new());
        assert!(!record.is_migrated());

        record.shopify_id = Some("8842".to_string());
        assert!(record.is_migrated());
    }

    #[test]
    fn test_marker_carries_timestamp() {
        let before = Utc::now();
        let marker = MigrationMarker::new("8842".to_string());

        assert_eq!(marker.shopify_id, "8842");
        assert!(marker.migrated_at >= before);
        assert!(marker.migrated_at <= Utc::now());
    }
}
