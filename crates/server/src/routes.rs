use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::content::ContentEntity;
use models::{
    banner, blog, branch, case_study, certificate, feedback, field, header, industry, industry_page, our_client, service as services,
    service_detail, service_faq, social_media, step, sub_service, technology,
};
use service::chat::ChatService;

use crate::observability;

pub mod banners;
pub mod chat;
pub mod content;
pub mod lookups;
pub mod menu;
pub mod related;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub chat: Arc<ChatService>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

/// `get{Entity}/:id`, `updata{Entity}/:id`, `delete{Entity}/:id`, plus search and
/// by-slug lookups when the entity has those columns.
macro_rules! read_write {
    ($module:ident, $patch:ident) => {{
        type E = $module::Entity;
        let label = <E as ContentEntity>::LABEL;
        let mut r = Router::new()
            .route(&format!("/get{label}/:id"), get(content::get_one::<E>))
            .route(&format!("/updata{label}/:id"), put(content::update::<E, $module::$patch>))
            .route(&format!("/delete{label}/:id"), delete(content::remove::<E>));
        if <E as ContentEntity>::search_column().is_some() {
            r = r.route(&format!("/search{label}"), get(content::search::<E>));
        }
        if <E as ContentEntity>::slug_column().is_some() {
            r = r.route(&format!("/get{label}BySlug/:slug"), get(content::by_slug::<E>));
        }
        r
    }};
}

/// [`read_write!`] plus `create{Entity}` and `getAll{Entity}`. The list handler
/// defaults to the flat listing and can be replaced with `list = handler`.
macro_rules! crud {
    ($module:ident, $draft:ident, $patch:ident) => {
        crud!($module, $draft, $patch, list = content::list::<$module::Entity>)
    };
    ($module:ident, $draft:ident, $patch:ident, list = $list:expr) => {{
        type E = $module::Entity;
        let label = <E as ContentEntity>::LABEL;
        read_write!($module, $patch)
            .route(&format!("/create{label}"), post(content::create::<E, $module::$draft>))
            .route(&format!("/getAll{label}"), get($list))
    }};
}

fn at<E: ContentEntity>() -> String {
    format!("/{}", E::ROUTE)
}

fn content_routes() -> Router<AppState> {
    Router::new()
        .nest(&at::<industry::Entity>(), crud!(industry, NewIndustry, IndustryPatch).route("/swapIndexs", put(content::swap::<industry::Entity>)))
        .nest(
            &at::<branch::Entity>(),
            crud!(branch, NewBranch, BranchPatch)
                .route("/swapIndexs", put(content::swap::<branch::Entity>))
                .route("/getBranchByPageId", get(lookups::branches_by_page)),
        )
        .nest(
            &at::<case_study::Entity>(),
            crud!(case_study, NewCaseStudy, CaseStudyPatch, list = related::case_studies)
                .route("/swapIndexs", put(content::swap::<case_study::Entity>))
                .route("/getCaseIndusty", get(related::case_study_industries)),
        )
        .nest(&at::<certificate::Entity>(), crud!(certificate, NewCertificate, CertificatePatch).route("/swapIndexs", put(content::swap::<certificate::Entity>)))
        .nest(&at::<feedback::Entity>(), crud!(feedback, NewFeedback, FeedbackPatch).route("/swapIndexs", put(content::swap::<feedback::Entity>)))
        .nest(&at::<field::Entity>(), crud!(field, NewField, FieldPatch).route("/swapIndexs", put(content::swap::<field::Entity>)))
        .nest(&at::<technology::Entity>(), crud!(technology, NewTechnology, TechnologyPatch).route("/swapIndexs", put(content::swap::<technology::Entity>)))
        .nest(
            &at::<social_media::Entity>(),
            crud!(social_media, NewSocialMedia, SocialMediaPatch)
                .route("/swapIndexs", put(content::swap::<social_media::Entity>))
                .route("/reorder", put(content::swap::<social_media::Entity>))
                .route("/getActiveSocialMedia", get(lookups::active_social_media)),
        )
        .nest(
            &at::<services::Entity>(),
            crud!(services, NewService, ServicePatch, list = related::services).route("/swapIndexs", put(content::swap::<services::Entity>)),
        )
        .nest(&at::<service_faq::Entity>(), crud!(service_faq, NewServiceFaq, ServiceFaqPatch).route("/swapIndexs", put(content::swap::<service_faq::Entity>)))
        .nest(&at::<service_detail::Entity>(), crud!(service_detail, NewServiceDetail, ServiceDetailPatch).route("/swapIndexs", put(content::swap::<service_detail::Entity>)))
        .nest(
            &at::<industry_page::Entity>(),
            crud!(industry_page, NewIndustryPage, IndustryPagePatch, list = related::industry_pages)
                .route("/swapIndexs", put(content::swap::<industry_page::Entity>)),
        )
        .nest(&at::<our_client::Entity>(), crud!(our_client, NewOurClient, OurClientPatch).route("/swapIndexs", put(content::swap::<our_client::Entity>)))
        .nest(
            &at::<banner::Entity>(),
            read_write!(banner, BannerPatch)
                .route("/createBanner", post(banners::create))
                .route("/getAllBanner", get(banners::current))
                .route("/getActiveBanner", get(banners::active)),
        )
        .nest(&at::<blog::Entity>(), crud!(blog, NewBlog, BlogPatch))
        .nest(
            &at::<sub_service::Entity>(),
            crud!(sub_service, NewSubService, SubServicePatch).route("/getByServiceId/:serviceId", get(lookups::sub_services_by_service)),
        )
        .nest(&at::<step::Entity>(), crud!(step, NewStep, StepPatch))
        .nest(&at::<header::Entity>(), menu_routes())
}

fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/createHeader", post(menu::create))
        .route("/getAllHeader", get(menu::list))
        .route("/getHeader/:id", get(menu::get_one))
        .route("/updataHeader/:id", put(menu::update))
        .route("/deleteHeader/:id", delete(menu::remove))
}

fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/history/:userId", get(chat::history))
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = content_routes().nest("/geminichatbot", chat_routes());

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(middleware::from_fn(observability::track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
