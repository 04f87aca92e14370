//! JWT authentication middleware.
//!
//! Verifies the `Authorization: Bearer <token>` header on protected routes
//! and injects an [`AuthContext`] into the request extensions. Handlers
//! receive the context through its `FromRequest` implementation. Token
//! issuance lives in the external identity service; this layer only
//! verifies signatures and expiry.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::str::FromStr;

use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hostly_core::domain::entities::user::UserRole;
use hostly_shared::config::auth::JwtConfig;

/// Claims carried in access tokens issued by the identity service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a UUID string
    pub sub: String,
    /// User role ("guest", "manager" or "admin")
    pub role: String,
    /// Expiration timestamp (seconds since epoch)
    pub exp: usize,
}

/// Authenticated identity extracted from a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Authenticated user id
    pub user_id: Uuid,
    /// Authenticated user role
    pub role: UserRole,
}

impl AuthContext {
    fn from_claims(claims: &Claims) -> Result<Self, String> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| format!("invalid subject claim: {}", claims.sub))?;
        let role = UserRole::from_str(&claims.role)
            .map_err(|_| format!("invalid role claim: {}", claims.role))?;
        Ok(Self { user_id, role })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .copied()
                .ok_or_else(|| ErrorUnauthorized("Authentication required")),
        )
    }
}

/// JWT verification middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    config: Rc<JwtConfig>,
}

impl JwtAuth {
    /// Create the middleware from the application's JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = JwtAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            config: self.config.clone(),
        }))
    }
}

/// The service produced by [`JwtAuth`]
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    config: Rc<JwtConfig>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    tracing::warn!(path = %req.path(), "missing bearer token");
                    return Err(ErrorUnauthorized("Missing authorization token"));
                }
            };

            match verify_token(&token, &config) {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service.call(req).await
                }
                Err(reason) => {
                    tracing::warn!(path = %req.path(), reason = %reason, "token rejected");
                    Err(ErrorUnauthorized("Invalid or expired token"))
                }
            }
        })
    }
}

/// Pull the token out of the `Authorization: Bearer` header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Decode and verify a token, producing the request identity
fn verify_token(token: &str, config: &JwtConfig) -> Result<AuthContext, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("token verification failed: {}", e))?;

    AuthContext::from_claims(&data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-at-least-32-bytes-long!!".to_string(),
            issuer: None,
        }
    }

    fn make_token(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("abc123".to_string()));

        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic abc123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);

        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_verify_valid_token() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let claims = Claims {
            sub: user_id.to_string(),
            role: "manager".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        let token = make_token(&claims, &config.secret);

        let context = verify_token(&token, &config).unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.role, UserRole::Manager);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let config = test_config();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: "guest".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        let token = make_token(&claims, "a-completely-different-signing-key!!");

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let config = test_config();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: "guest".to_string(),
            exp: (chrono::Utc::now().timestamp() - 3600) as usize,
        };
        let token = make_token(&claims, &config.secret);

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_verify_rejects_unknown_role() {
        let config = test_config();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: "owner".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        let token = make_token(&claims, &config.secret);

        assert!(verify_token(&token, &config).is_err());
    }
}
