use crate::error::ApiError;
use crate::{consts, AppState};
use actix_service::{forward_ready, Service, Transform};
use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    web, Error, HttpMessage,
};
use domain::auth::{TokenClaims, TokenService};
use futures::future::{ok, LocalBoxFuture, Ready};
use infra::auth::JwtTokenService;
use std::rc::Rc;

/// Bearer-token gate for mutating routes. Wraps only the POST/DELETE
/// resources, so reads stay open.
pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(BearerAuthMiddleware {
            service: Rc::new(service),
        })
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
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
        let service = Rc::clone(&self.service);
        let verified = verify_bearer(&req);
        Box::pin(async move {
            match verified {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    service.call(req).await
                }
                Err(err) => Err(err.into()),
            }
        })
    }
}

fn token_from_header(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix(consts::BEARER_PREFIX)
        .map(str::to_string)
}

fn verify_bearer(req: &ServiceRequest) -> Result<TokenClaims, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError::Internal("application state missing".to_string()))?;
    let token = token_from_header(req).ok_or(ApiError::Unauthorized)?;
    let token_svc = JwtTokenService::new(
        state.app_cfg.jwt_secret(),
        state.app_cfg.jwt_expire_secs(),
    );
    token_svc.verify(&token).map_err(|_| ApiError::Unauthorized)
}
