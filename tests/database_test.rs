// ABOUTME: Integration tests for lead and assessment storage
// ABOUTME: In-memory SQLite round trips, ordering, and file-backed creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitform::config::EstimationConfig;
use fitform::database::Database;
use fitform::intelligence::estimation_engine::estimate_with;
use fitform::intelligence::posture::{analyze_posture, PostureReport, PostureThresholds};
use fitform::models::{ActivityLevel, Goal};
use tempfile::TempDir;

mod common;

use common::{create_test_database, level_pose, profile_with, reference_profile, sample_contact};

#[tokio::test]
async fn test_insert_and_get_lead_round_trip() {
    let db = create_test_database().await.unwrap();
    let profile = reference_profile();
    let contact = sample_contact("Aiko", "shrimp");
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();

    let lead_id = db
        .insert_lead_and_assessment(&profile, &contact, &result, "template", None)
        .await
        .unwrap();

    let lead = db.get_lead(lead_id).await.unwrap().unwrap();
    assert_eq!(lead.id, lead_id);
    assert_eq!(lead.contact, contact);
    assert_eq!(lead.profile, profile);
    assert_eq!(db.count_leads().await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_missing_lead_returns_none() {
    let db = create_test_database().await.unwrap();
    assert!(db.get_lead(42).await.unwrap().is_none());
    assert_eq!(db.count_leads().await.unwrap(), 0);
}

#[tokio::test]
async fn test_assessment_keeps_full_precision_and_posture_json() {
    let db = create_test_database().await.unwrap();
    let profile = reference_profile();
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    let posture = analyze_posture(&level_pose(), &PostureThresholds::default()).unwrap();

    let lead_id = db
        .insert_lead_and_assessment(
            &profile,
            &sample_contact("Ken", ""),
            &result,
            "notes here",
            Some(&posture),
        )
        .await
        .unwrap();

    let assessments = db.list_assessments().await.unwrap();
    assert_eq!(assessments.len(), 1);
    let stored = &assessments[0];
    assert_eq!(stored.lead_id, lead_id);
    assert_eq!(stored.lead_name, "Ken");
    assert_eq!(stored.result, result);
    assert_eq!(stored.notes, "notes here");

    let json = stored.posture_findings.as_deref().unwrap();
    let decoded: PostureReport = serde_json::from_str(json).unwrap();
    assert_eq!(decoded, posture);
}

#[tokio::test]
async fn test_lists_are_newest_first() {
    let db = create_test_database().await.unwrap();
    let config = EstimationConfig::default();

    for (name, goal) in [("First", Goal::Lose), ("Second", Goal::Maintain), ("Third", Goal::Gain)] {
        let profile = profile_with(goal, ActivityLevel::Light);
        let result = estimate_with(&profile, &config).unwrap();
        db.insert_lead_and_assessment(&profile, &sample_contact(name, ""), &result, "", None)
            .await
            .unwrap();
    }

    let names: Vec<String> = db
        .list_leads()
        .await
        .unwrap()
        .into_iter()
        .map(|lead| lead.contact.name)
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);

    let assessed: Vec<String> = db
        .list_assessments()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.lead_name)
        .collect();
    assert_eq!(assessed, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_file_database_is_created_with_parent_dirs() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("fitform.db");
    let url = format!("sqlite:{}", path.display());

    let profile = reference_profile();
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    {
        let db = Database::new(&url).await.unwrap();
        db.insert_lead_and_assessment(&profile, &sample_contact("Mio", ""), &result, "", None)
            .await
            .unwrap();
        db.pool().close().await;
    }
    assert!(path.exists());

    // Reopening runs migrations again without touching existing rows
    let db = Database::new(&url).await.unwrap();
    assert_eq!(db.count_leads().await.unwrap(), 1);
}
