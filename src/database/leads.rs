// ABOUTME: Database operations for leads and their computed assessments
// ABOUTME: Transactional insert plus newest-first listing for exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use super::Database;
use crate::intelligence::posture::PostureReport;
use crate::logging::AppLogger;
use chrono::{DateTime, SecondsFormat, Utc};
use fitform_core::errors::{AppError, AppResult};
use fitform_core::models::{ClientContact, ClientProfile, EstimationResult};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};
use std::time::Instant;

/// A captured lead: contact details plus the submitted profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Row identifier
    pub id: i64,
    /// Contact and preference fields
    pub contact: ClientContact,
    /// Biometric profile
    pub profile: ClientProfile,
    /// When the lead was captured
    pub created_at: DateTime<Utc>,
}

/// A stored assessment row, joined with its lead's name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAssessment {
    /// Row identifier
    pub id: i64,
    /// Owning lead
    pub lead_id: i64,
    /// Lead display name
    pub lead_name: String,
    /// Estimation figures
    pub result: EstimationResult,
    /// Free-text notes (usually the meal template)
    pub notes: String,
    /// Posture report as JSON, absent when no check was attempted
    pub posture_findings: Option<String>,
    /// When the assessment was computed
    pub created_at: DateTime<Utc>,
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl Database {
    /// Store a lead and its assessment in one transaction
    ///
    /// Returns the new lead id.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either insert fails; nothing is
    /// stored in that case
    pub async fn insert_lead_and_assessment(
        &self,
        profile: &ClientProfile,
        contact: &ClientContact,
        result: &EstimationResult,
        notes: &str,
        posture: Option<&PostureReport>,
    ) -> AppResult<i64> {
        let started = Instant::now();
        // Fixed-width timestamps keep text ordering chronological
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let posture_json = posture.map(serde_json::to_string).transpose()?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let lead_id = sqlx::query(
            r"
            INSERT INTO leads (name, email, phone, age, gender, height_cm, weight_kg,
                               activity_level, goal, dietary_prefs, allergies, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(i64::from(profile.age))
        .bind(profile.sex.as_str())
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(profile.activity_level.as_str())
        .bind(profile.goal.as_str())
        .bind(&contact.dietary_prefs)
        .bind(&contact.allergies)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert lead: {e}")))?
        .last_insert_rowid();

        sqlx::query(
            r"
            INSERT INTO assessments (lead_id, bmi, bmr, tdee, target_calories, protein_g,
                                     fat_g, carbs_g, notes, posture_findings, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(lead_id)
        .bind(result.bmi)
        .bind(result.bmr_kcal)
        .bind(result.tdee_kcal)
        .bind(result.target_kcal)
        .bind(result.protein_g)
        .bind(result.fat_g)
        .bind(result.carb_g)
        .bind(notes)
        .bind(posture_json)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert assessment: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit lead: {e}")))?;

        AppLogger::log_database_operation("insert", "leads", true, elapsed_ms(started));
        Ok(lead_id)
    }

    /// Get a lead by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed
    pub async fn get_lead(&self, id: i64) -> AppResult<Option<Lead>> {
        let row = sqlx::query(
            r"
            SELECT id, name, email, phone, age, gender, height_cm, weight_kg,
                   activity_level, goal, dietary_prefs, allergies, created_at
            FROM leads
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get lead: {e}")))?;

        row.map(|r| row_to_lead(&r)).transpose()
    }

    /// List all leads, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_leads(&self) -> AppResult<Vec<Lead>> {
        let started = Instant::now();
        let rows = sqlx::query(
            r"
            SELECT id, name, email, phone, age, gender, height_cm, weight_kg,
                   activity_level, goal, dietary_prefs, allergies, created_at
            FROM leads
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list leads: {e}")))?;

        AppLogger::log_database_operation("select", "leads", true, elapsed_ms(started));
        rows.iter().map(row_to_lead).collect()
    }

    /// List all assessments with their lead's name, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_assessments(&self) -> AppResult<Vec<StoredAssessment>> {
        let started = Instant::now();
        let rows = sqlx::query(
            r"
            SELECT a.id, a.lead_id, l.name AS lead_name, a.bmi, a.bmr, a.tdee,
                   a.target_calories, a.protein_g, a.fat_g, a.carbs_g, a.notes,
                   a.posture_findings, a.created_at
            FROM assessments a
            JOIN leads l ON l.id = a.lead_id
            ORDER BY a.created_at DESC, a.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list assessments: {e}")))?;

        AppLogger::log_database_operation("select", "assessments", true, elapsed_ms(started));
        rows.iter().map(row_to_assessment).collect()
    }

    /// Number of stored leads
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_leads(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM leads")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count leads: {e}")))?;
        Ok(row.get("count"))
    }
}

fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid created_at {raw:?}: {e}")))
}

fn row_to_lead(row: &SqliteRow) -> AppResult<Lead> {
    let age: i64 = row.get("age");
    let gender: String = row.get("gender");
    let activity_level: String = row.get("activity_level");
    let goal: String = row.get("goal");
    let created_at: String = row.get("created_at");

    let stored = |field: &str, e: AppError| {
        AppError::database(format!("Invalid stored {field}: {}", e.message))
    };

    Ok(Lead {
        id: row.get("id"),
        contact: ClientContact {
            name: row.get("name"),
            email: row.get("email"),
            phone: row.get("phone"),
            dietary_prefs: row.get("dietary_prefs"),
            allergies: row.get("allergies"),
        },
        profile: ClientProfile {
            sex: gender.parse().map_err(|e| stored("gender", e))?,
            age: u32::try_from(age)
                .map_err(|_| AppError::database(format!("Invalid stored age: {age}")))?,
            height_cm: row.get("height_cm"),
            weight_kg: row.get("weight_kg"),
            activity_level: activity_level
                .parse()
                .map_err(|e| stored("activity_level", e))?,
            goal: goal.parse().map_err(|e| stored("goal", e))?,
        },
        created_at: parse_timestamp(&created_at)?,
    })
}

fn row_to_assessment(row: &SqliteRow) -> AppResult<StoredAssessment> {
    let created_at: String = row.get("created_at");

    Ok(StoredAssessment {
        id: row.get("id"),
        lead_id: row.get("lead_id"),
        lead_name: row.get("lead_name"),
        result: EstimationResult {
            bmi: row.get("bmi"),
            bmr_kcal: row.get("bmr"),
            tdee_kcal: row.get("tdee"),
            target_kcal: row.get("target_calories"),
            protein_g: row.get("protein_g"),
            fat_g: row.get("fat_g"),
            carb_g: row.get("carbs_g"),
        },
        notes: row.get("notes"),
        posture_findings: row.get("posture_findings"),
        created_at: parse_timestamp(&created_at)?,
    })
}
