use anyhow::Result;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::json;

use super::setup_test_db;
use crate::content::Draft;
use crate::{case_study, social_media, user_question};

#[tokio::test]
async fn case_study_gets_database_assigned_id() -> Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now();

    let mut am = <case_study::NewCaseStudy as Draft<case_study::Entity>>::into_active_model(case_study::NewCaseStudy {
        slug: "route-planner".into(),
        industry_id: None,
        summary: json!({"title": "Route planner"}),
        challenges: Some(json!(["legacy data"])),
        impact: None,
        system_phase: json!([{"phase": 1}]),
        additional_information: None,
        metas: None,
    });
    am.created_at = Set(now.into());
    am.updated_at = Set(now.into());
    am.index = Set(1);
    let first = am.insert(&db).await?;
    assert!(first.id > 0);
    assert_eq!(first.summary["title"], "Route planner");

    let found = case_study::Entity::find()
        .filter(case_study::Column::Slug.eq("route-planner"))
        .one(&db)
        .await?;
    assert_eq!(found.map(|m| m.id), Some(first.id));
    Ok(())
}

#[tokio::test]
async fn social_media_defaults_round_trip() -> Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now();
    let draft: social_media::NewSocialMedia = serde_json::from_value(json!({"link": "https://x.com/acme"}))?;
    let mut am = <social_media::NewSocialMedia as Draft<social_media::Entity>>::into_active_model(draft);
    am.created_at = Set(now.into());
    am.updated_at = Set(now.into());
    am.index = Set(4);
    let saved = am.insert(&db).await?;
    assert!(saved.active);
    assert_eq!(saved.index, 4);
    assert!(saved.deleted_at.is_none());
    Ok(())
}

#[tokio::test]
async fn user_question_history_is_newest_first() -> Result<()> {
    let db = setup_test_db().await?;
    for q in ["first", "second", "third"] {
        user_question::create(&db, user_question::NewQuestion {
            question: q.into(),
            answer: format!("re: {q}"),
            keywords: None,
            user_id: Some("visitor-1".into()),
            error: None,
        })
        .await?;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    user_question::create(&db, user_question::NewQuestion {
        question: "other".into(),
        answer: "x".into(),
        keywords: None,
        user_id: Some("visitor-2".into()),
        error: None,
    })
    .await?;

    let rows = user_question::find_by_user(&db, "visitor-1", Some(2), None).await?;
    let qs: Vec<_> = rows.iter().map(|r| r.question.as_str()).collect();
    assert_eq!(qs, vec!["third", "second"]);

    let rest = user_question::find_by_user(&db, "visitor-1", None, Some(2)).await?;
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].question, "first");
    Ok(())
}

#[tokio::test]
async fn blank_question_is_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let err = user_question::create(&db, user_question::NewQuestion {
        question: "  ".into(),
        answer: String::new(),
        keywords: None,
        user_id: None,
        error: None,
    })
    .await;
    assert!(matches!(err, Err(crate::errors::ModelError::Validation(_))));
    Ok(())
}
