//! List views that carry related rows alongside each item.
//!
//! Children are fetched with one batched query per relation, already filtered to
//! live rows and sorted in their own display order.

use sea_orm::{ConnectionTrait, LoaderTrait};
use serde::Serialize;

use common::pagination::ListQuery;
use common::types::Listing;
use models::{case_study, industry, industry_page, service, service_detail, service_faq, sub_service};

use crate::content::{self, in_display_order, live};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceWithRelations {
    #[serde(flatten)]
    pub service: service::Model,
    pub sub_services: Vec<sub_service::Model>,
    pub service_faqs: Vec<service_faq::Model>,
    /// Slug of the service's detail page, when one exists.
    pub detail_slug: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseStudyWithIndustry {
    #[serde(flatten)]
    pub case_study: case_study::Model,
    pub industry: Option<industry::Model>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryWithCaseStudies {
    #[serde(flatten)]
    pub industry: industry::Model,
    pub case_studies: Vec<case_study::Model>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryPageWithIndustry {
    #[serde(flatten)]
    pub industry_page: industry_page::Model,
    pub industry: Option<IndustryWithCaseStudies>,
}

pub async fn services<C: ConnectionTrait>(db: &C, query: ListQuery) -> Result<Listing<ServiceWithRelations>, ServiceError> {
    let Listing { items, page_info } = content::list::<service::Entity, C>(db, query).await?;
    let subs = items.load_many(in_display_order(live::<sub_service::Entity>()), db).await?;
    let faqs = items.load_many(in_display_order(live::<service_faq::Entity>()), db).await?;
    let details = items.load_many(in_display_order(live::<service_detail::Entity>()), db).await?;

    let items = items
        .into_iter()
        .zip(subs)
        .zip(faqs)
        .zip(details)
        .map(|(((service, sub_services), service_faqs), details)| ServiceWithRelations {
            service,
            sub_services,
            service_faqs,
            detail_slug: details.into_iter().next().map(|d| d.slug),
        })
        .collect();
    Ok(Listing { items, page_info })
}

pub async fn case_studies<C: ConnectionTrait>(db: &C, query: ListQuery) -> Result<Listing<CaseStudyWithIndustry>, ServiceError> {
    let Listing { items, page_info } = content::list::<case_study::Entity, C>(db, query).await?;
    let industries = items.load_one(live::<industry::Entity>(), db).await?;
    let items = items
        .into_iter()
        .zip(industries)
        .map(|(case_study, industry)| CaseStudyWithIndustry { case_study, industry })
        .collect();
    Ok(Listing { items, page_info })
}

pub async fn industry_pages<C: ConnectionTrait>(db: &C, query: ListQuery) -> Result<Listing<IndustryPageWithIndustry>, ServiceError> {
    let Listing { items, page_info } = content::list::<industry_page::Entity, C>(db, query).await?;
    let industries = items.load_one(live::<industry::Entity>(), db).await?;
    let present: Vec<industry::Model> = industries.iter().flatten().cloned().collect();
    let mut expanded = with_case_studies(db, present).await?.into_iter();

    let items = items
        .into_iter()
        .zip(industries)
        .map(|(industry_page, industry)| IndustryPageWithIndustry {
            industry_page,
            industry: industry.and_then(|_| expanded.next()),
        })
        .collect();
    Ok(Listing { items, page_info })
}

/// Every live industry in display order, each with its live case studies.
pub async fn industries_with_case_studies<C: ConnectionTrait>(db: &C) -> Result<Vec<IndustryWithCaseStudies>, ServiceError> {
    let industries = content::all::<industry::Entity, C>(db).await?;
    with_case_studies(db, industries).await
}

async fn with_case_studies<C: ConnectionTrait>(
    db: &C,
    industries: Vec<industry::Model>,
) -> Result<Vec<IndustryWithCaseStudies>, ServiceError> {
    let studies = industries.load_many(in_display_order(live::<case_study::Entity>()), db).await?;
    Ok(industries
        .into_iter()
        .zip(studies)
        .map(|(industry, case_studies)| IndustryWithCaseStudies { industry, case_studies })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use common::pagination::Pagination;
    use serde_json::json;
    use uuid::Uuid;

    async fn add_industry(db: &sea_orm::DatabaseConnection, title: &str) -> Result<industry::Model, ServiceError> {
        let draft: industry::NewIndustry = serde_json::from_value(json!({ "title": title })).map_err(|e| ServiceError::BadRequest(e.to_string()))?;
        content::create::<industry::Entity, _, _>(db, draft).await
    }

    async fn add_case_study(db: &sea_orm::DatabaseConnection, slug: &str, industry_id: Option<Uuid>) -> Result<case_study::Model, ServiceError> {
        let draft = case_study::NewCaseStudy {
            slug: slug.into(),
            industry_id,
            summary: json!({ "title": slug }),
            challenges: None,
            impact: None,
            system_phase: json!([]),
            additional_information: None,
            metas: None,
        };
        content::create::<case_study::Entity, _, _>(db, draft).await
    }

    #[tokio::test]
    async fn services_carry_children_and_detail_slug() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let new_service = |t: &str| service::NewService { title: t.into(), short_description: None, long_description: None, button_link: None, image: None };
        let cloud = content::create::<service::Entity, _, _>(&db, new_service("Cloud")).await?;
        let data = content::create::<service::Entity, _, _>(&db, new_service("Data")).await?;

        for t in ["Migration", "Ops"] {
            let sub = sub_service::NewSubService { service_id: cloud.id, title: t.into(), description: "d".into(), image: None, button_link: None };
            content::create::<sub_service::Entity, _, _>(&db, sub).await?;
        }
        let faq = service_faq::NewServiceFaq { service_id: cloud.id, question: "Why?".into(), answer: "Because".into() };
        let faq = content::create::<service_faq::Entity, _, _>(&db, faq).await?;
        content::soft_delete::<service_faq::Entity, _>(&db, &faq.id).await?;
        let detail: service_detail::NewServiceDetail =
            serde_json::from_value(json!({ "slug": "cloud", "service_id": cloud.id, "hero_title": "Cloud" }))?;
        content::create::<service_detail::Entity, _, _>(&db, detail).await?;

        let listing = services(&db, ListQuery::All).await?;
        assert!(listing.page_info.is_none());
        assert_eq!(listing.items.len(), 2);
        let first = &listing.items[0];
        assert_eq!(first.service.id, cloud.id);
        assert_eq!(first.sub_services.len(), 2);
        assert!(first.service_faqs.is_empty());
        assert_eq!(first.detail_slug.as_deref(), Some("cloud"));
        let second = &listing.items[1];
        assert_eq!(second.service.id, data.id);
        assert!(second.sub_services.is_empty());
        assert!(second.detail_slug.is_none());

        let v = serde_json::to_value(first)?;
        assert_eq!(v["title"], "Cloud");
        assert_eq!(v["sub_services"].as_array().map(Vec::len), Some(2));

        let paged = services(&db, ListQuery::Page(Pagination { page: 2, per_page: 1 })).await?;
        assert_eq!(paged.items.iter().map(|s| s.service.id).collect::<Vec<_>>(), vec![data.id]);
        assert_eq!(paged.page_info.map(|p| p.total_items), Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn case_studies_resolve_live_industry() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let retail = add_industry(&db, "Retail").await?;
        let closed = add_industry(&db, "Closed").await?;
        add_case_study(&db, "shop", Some(retail.id)).await?;
        add_case_study(&db, "orphan", None).await?;
        add_case_study(&db, "stale", Some(closed.id)).await?;
        content::soft_delete::<industry::Entity, _>(&db, &closed.id).await?;

        let listing = case_studies(&db, ListQuery::All).await?;
        let pairs: Vec<_> = listing
            .items
            .iter()
            .map(|c| (c.case_study.slug.as_str(), c.industry.as_ref().map(|i| i.title.as_str())))
            .collect();
        assert_eq!(pairs, vec![("shop", Some("Retail")), ("orphan", None), ("stale", None)]);
        Ok(())
    }

    #[tokio::test]
    async fn industries_group_their_case_studies() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let retail = add_industry(&db, "Retail").await?;
        let health = add_industry(&db, "Health").await?;
        let a = add_case_study(&db, "a", Some(retail.id)).await?;
        let b = add_case_study(&db, "b", Some(retail.id)).await?;
        let gone = add_case_study(&db, "gone", Some(health.id)).await?;
        content::soft_delete::<case_study::Entity, _>(&db, &gone.id).await?;

        let grouped = industries_with_case_studies(&db).await?;
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].industry.id, retail.id);
        assert_eq!(grouped[0].case_studies.iter().map(|c| c.id).collect::<Vec<_>>(), vec![a.id, b.id]);
        assert_eq!(grouped[1].industry.id, health.id);
        assert!(grouped[1].case_studies.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn industry_pages_nest_industry_with_case_studies() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let retail = add_industry(&db, "Retail").await?;
        let study = add_case_study(&db, "shop", Some(retail.id)).await?;
        let page: industry_page::NewIndustryPage = serde_json::from_value(json!({
            "slug": "retail",
            "industry_id": retail.id,
            "hero_title": "Retail",
            "hero_description": "Stores"
        }))?;
        content::create::<industry_page::Entity, _, _>(&db, page).await?;

        let listing = industry_pages(&db, ListQuery::default()).await?;
        assert_eq!(listing.items.len(), 1);
        let nested = listing.items[0].industry.as_ref().expect("industry");
        assert_eq!(nested.industry.id, retail.id);
        assert_eq!(nested.case_studies.iter().map(|c| c.id).collect::<Vec<_>>(), vec![study.id]);
        Ok(())
    }
}
