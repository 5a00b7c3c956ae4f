use std::sync::Arc;

use crate::controllers::{
    AdminController, AuthController, PricingController, SubscriptionController,
    TestimonialController,
};
use crate::domain::{
    admin::AdminService, auth::AuthService, subscription::SubscriptionService,
    testimonial::TestimonialService,
};
use crate::error::AppResult;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::repositories::{
    HttpAdminRepository, HttpAuthRepository, HttpSubscriptionRepository,
    HttpTestimonialRepository, TokenRepository,
};

/// Fully wired controllers talking to one backend
pub struct App {
    pub auth: AuthController,
    pub pricing: PricingController,
    pub subscription: SubscriptionController,
    pub testimonial: TestimonialController,
    pub admin: AdminController,
}

impl App {
    pub fn new(api_base_url: &str, tokens: Arc<dyn TokenRepository>) -> AppResult<Self> {
        // === DEPENDENCY INJECTION SETUP ===
        // 1. HTTP client (shares the token store so a 401 can clear it)
        let client = Arc::new(ApiClient::new(api_base_url, tokens.clone())?);

        // 2. Repositories
        let auth_repo = Arc::new(HttpAuthRepository::new(client.clone()));
        let subscription_repo = Arc::new(HttpSubscriptionRepository::new(client.clone()));
        let testimonial_repo = Arc::new(HttpTestimonialRepository::new(client.clone()));
        let admin_repo = Arc::new(HttpAdminRepository::new(client));

        // 3. Services
        let auth_service = Arc::new(AuthService::new(auth_repo, tokens));
        let subscription_service = Arc::new(SubscriptionService::new(subscription_repo));
        let testimonial_service = Arc::new(TestimonialService::new(testimonial_repo.clone()));
        let admin_service = Arc::new(AdminService::new(admin_repo, testimonial_repo));

        // 4. Controllers
        Ok(Self {
            auth: AuthController::new(auth_service),
            pricing: PricingController::new(subscription_service.clone()),
            subscription: SubscriptionController::new(subscription_service),
            testimonial: TestimonialController::new(testimonial_service),
            admin: AdminController::new(admin_service),
        })
    }
}
