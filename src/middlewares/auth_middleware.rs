//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 정보를 추출합니다.
//! 특정 capability를 요구하도록 구성하면 역할 검사까지 경계에서 수행합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::role::Capability;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 접근에 필요한 capability (선택사항)
    required_capability: Option<Capability>,
}

impl AuthMiddleware {
    /// 유효한 액세스 토큰만 요구하는 미들웨어 생성
    pub fn required() -> Self {
        Self {
            required_capability: None,
        }
    }

    /// 인증과 함께 특정 capability를 요구하는 미들웨어 생성
    pub fn requiring(capability: Capability) -> Self {
        Self {
            required_capability: Some(capability),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_capability: self.required_capability,
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};
    use super::*;
    use crate::domain::models::auth::{AuthenticatedUser, UserRole};
    use crate::services::auth::TokenService;
    use crate::services::test_support;

    fn tokens() -> &'static TokenService {
        &test_support::shared().services.tokens
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        tokens();
        let app = test::init_service(
            App::new().service(web::scope("").wrap(AuthMiddleware::required()).route("/me", web::get().to(whoami))),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_access_token_reaches_handler() {
        let pair = tokens().generate_token_pair("u-1", "a@x.com", UserRole::Customer).unwrap();
        let app = test::init_service(
            App::new().service(web::scope("").wrap(AuthMiddleware::required()).route("/me", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "u-1");
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_an_access_token() {
        let pair = tokens().generate_token_pair("u-1", "a@x.com", UserRole::Customer).unwrap();
        let app = test::init_service(
            App::new().service(web::scope("").wrap(AuthMiddleware::required()).route("/me", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.refresh_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_customer_cannot_manage_catalog() {
        let service = tokens();
        let app = test::init_service(
            App::new().service(
                web::scope("")
                    .wrap(AuthMiddleware::requiring(Capability::ManageCatalog))
                    .route("/admin", web::get().to(whoami)),
            ),
        )
        .await;

        let customer = service.generate_token_pair("u-1", "a@x.com", UserRole::Customer).unwrap();
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", customer.access_token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 403);

        let admin = service.generate_token_pair("u-2", "b@x.com", UserRole::Admin).unwrap();
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", admin.access_token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }
}
