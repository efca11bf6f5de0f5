use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::utils::Config;

/// Aufgelöste Shopify Session für einen Request
#[derive(Debug, Clone)]
pub struct Session {
    pub shop: String,
    pub access_token: String,
}

/// Claims eines Shopify Session Tokens (App Bridge JWT);
/// exp und aud prüft jsonwebtoken, dest prüfen wir selbst
#[derive(Debug, Deserialize)]
struct SessionTokenClaims {
    dest: String,
}

/// Löse Session auf: Bearer Session Token falls vorhanden,
/// sonst Offline Session aus dem konfigurierten Admin Token.
/// Ein ungültiger Bearer Token fällt NICHT auf offline zurück.
pub fn resolve_session(config: &Config, bearer: Option<&str>) -> Option<Session> {
    if let Some(token) = bearer {
        return verify_session_token(config, token);
    }

    offline_session(config)
}

fn offline_session(config: &Config) -> Option<Session> {
    let access_token = config.shopify_admin_token.clone()?;

    Some(Session {
        shop: config.shopify_shop.clone(),
        access_token,
    })
}

/// Verifiziere Session Token: HS256 mit dem API Secret,
/// Audience = API Key, dest muss auf den konfigurierten Shop zeigen
fn verify_session_token(config: &Config, token: &str) -> Option<Session> {
    let api_key = config.shopify_api_key.as_ref()?;
    let api_secret = config.shopify_api_secret.as_ref()?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[api_key]);

    let data = decode::<SessionTokenClaims>(
        token,
        &DecodingKey::from_secret(api_secret.as_bytes()),
        &validation,
    );

    let data = match data {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Session token rejected: {}", e);
            return None;
        }
    };

    let dest_host = data
        .claims
        .dest
        .trim_start_matches("https://")
        .trim_end_matches('/');

    if dest_host != config.shopify_shop {
        tracing::warn!(
            "Session token dest {} does not match configured shop",
            data.claims.dest
        );
        return None;
    }

    // Der Session Token authentifiziert nur den Request;
    // API Calls laufen über den hinterlegten Admin Token
    config.shopify_admin_token.as_ref().map(|token| Session {
        shop: config.shopify_shop.clone(),
        access_token: token.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const API_KEY: &str = "test-api-key";
    const API_SECRET: &str = "test-api-secret";
    const SHOP: &str = "test-shop.myshopify.com";

    fn test_config(admin_token: Option<&str>) -> Config {
        Config {
            migration_secret: "test-secret".to_string(),
            shopify_shop: SHOP.to_string(),
            shopify_admin_token: admin_token.map(|t| t.to_string()),
            shopify_api_key: Some(API_KEY.to_string()),
            shopify_api_secret: Some(API_SECRET.to_string()),
            shopify_api_version: "2024-01".to_string(),
            firestore_project_id: "test-project".to_string(),
            firestore_base_url: "https://firestore.googleapis.com/v1".to_string(),
            firestore_credentials: None,
            firestore_credentials_json: Some("{}".to_string()),
            firestore_collection: "products".to_string(),
            batch_size: 10,
            metafield_delay_ms: 200,
            record_delay_ms: 350,
            batch_delay_ms: 1000,
            api_port: 8080,
        }
    }

    fn make_token(secret: &str, aud: &str, dest: &str, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = json!({
            "iss": format!("{}/admin", dest),
            "dest": dest,
            "aud": aud,
            "sub": "42",
            "exp": now + exp_offset,
            "nbf": now - 10,
            "iat": now - 10,
            "jti": "test-token-id",
        });

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encode token")
    }

    #[test]
    fn test_valid_session_token() {
        let config = test_config(Some("shpat_test"));
        let token = make_token(API_SECRET, API_KEY, &format!("https://{}", SHOP), 300);

        let session = resolve_session(&config, Some(&token)).expect("session expected");

        assert_eq!(session.shop, SHOP);
        assert_eq!(session.access_token, "shpat_test");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config(Some("shpat_test"));
        let token = make_token("other-secret", API_KEY, &format!("https://{}", SHOP), 300);

        assert!(resolve_session(&config, Some(&token)).is_none());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let config = test_config(Some("shpat_test"));
        let token = make_token(API_SECRET, "other-app", &format!("https://{}", SHOP), 300);

        assert!(resolve_session(&config, Some(&token)).is_none());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config(Some("shpat_test"));
        let token = make_token(API_SECRET, API_KEY, &format!("https://{}", SHOP), -3600);

        assert!(resolve_session(&config, Some(&token)).is_none());
    }

    #[test]
    fn test_foreign_shop_rejected() {
        let config = test_config(Some("shpat_test"));
        let token = make_token(API_SECRET, API_KEY, "https://other-shop.myshopify.com", 300);

        assert!(resolve_session(&config, Some(&token)).is_none());
    }

    #[test]
    fn test_invalid_bearer_does_not_fall_back_to_offline() {
        let config = test_config(Some("shpat_test"));

        assert!(resolve_session(&config, Some("garbage")).is_none());
    }

    #[test]
    fn test_offline_session_without_bearer() {
        let config = test_config(Some("shpat_offline"));

        let session = resolve_session(&config, None).expect("session expected");
        assert_eq!(session.access_token, "shpat_offline");
    }

    #[test]
    fn test_no_session_without_any_credentials() {
        let config = test_config(None);

        assert!(resolve_session(&config, None).is_none());
    }
}
