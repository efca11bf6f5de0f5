use serde::{Deserialize, Serialize};

/// Shopify Produkt Payload (POST /products.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub title: String,
    pub body_html: String,
    pub vendor: String,
    pub product_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    pub variants: Vec<VariantPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<ImagePayload>,
}

/// Produkt-Variante; Preise laufen als Strings über die REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantPayload {
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    pub src: String,
}

/// Shopify Metafield Payload (POST /products/{id}/metafields.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetafieldPayload {
    pub namespace: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: String,
}

impl MetafieldPayload {
    pub fn text(key: &str, value: impl Into<String>) -> Self {
        Self {
            namespace: "custom".to_string(),
            key: key.to_string(),
            value: value.into(),
            value_type: "single_line_text_field".to_string(),
        }
    }

    pub fn integer(key: &str, value: i64) -> Self {
        Self {
            namespace: "custom".to_string(),
            key: key.to_string(),
            value: value.to_string(),
            value_type: "number_integer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_serializes_with_string_price() {
        let product = ProductPayload {
            title: "Steel Bottle 750ml".to_string(),
            body_html: String::new(),
            vendor: "Acme Traders".to_string(),
            product_type: "Kitchen".to_string(),
            tags: vec!["Bottles".to_string()],
            variants: vec![VariantPayload {
                price: "449.5".to_string(),
                sku: Some("8901234567890".to_string()),
                inventory_quantity: Some(24),
                inventory_management: Some("shopify".to_string()),
                compare_at_price: Some("499".to_string()),
            }],
            images: vec![ImagePayload {
                src: "https://cdn.example.com/bottle-front.jpg".to_string(),
            }],
        };

        let value = serde_json::to_value(&product).expect("serialize");

        assert_eq!(value["title"], "Steel Bottle 750ml");
        assert_eq!(value["variants"][0]["price"], "449.5");
        assert_eq!(value["variants"][0]["inventory_quantity"], 24);
        assert_eq!(value["tags"], json!(["Bottles"]));
        assert_eq!(
            value["images"][0]["src"],
            "https://cdn.example.com/bottle-front.jpg"
        );
    }

    #[test]
    fn test_variant_omits_absent_fields() {
        let variant = VariantPayload {
            price: "120".to_string(),
            sku: None,
            inventory_quantity: None,
            inventory_management: None,
            compare_at_price: None,
        };

        let value = serde_json::to_value(&variant).expect("serialize");
        let object = value.as_object().expect("object");

        assert_eq!(object.len(), 1);
        assert!(object.contains_key("price"));
    }

    #[test]
    fn test_empty_tags_and_images_omitted() {
        let product = ProductPayload {
            title: "Untitled Product".to_string(),
            body_html: String::new(),
            vendor: "Unknown".to_string(),
            product_type: String::new(),
            tags: Vec::new(),
            variants: vec![VariantPayload {
                price: "10".to_string(),
                sku: None,
                inventory_quantity: None,
                inventory_management: None,
                compare_at_price: None,
            }],
            images: Vec::new(),
        };

        let value = serde_json::to_value(&product).expect("serialize");
        let object = value.as_object().expect("object");

        assert!(!object.contains_key("tags"));
        assert!(!object.contains_key("images"));
    }

    #[test]
    fn test_metafield_type_key_renamed() {
        let metafield = MetafieldPayload::text("brand", "SteelCo");
        let value = serde_json::to_value(&metafield).expect("serialize");

        assert_eq!(value["namespace"], "custom");
        assert_eq!(value["key"], "brand");
        assert_eq!(value["value"], "SteelCo");
        assert_eq!(value["type"], "single_line_text_field");
        assert!(value.get("value_type").is_none());
    }

    #[test]
    fn test_integer_metafield() {
        let metafield = MetafieldPayload::integer("value", 380);
        let value = serde_json::to_value(&metafield).expect("serialize");

        assert_eq!(value["value"], "380");
        assert_eq!(value["type"], "number_integer");
    }
}
