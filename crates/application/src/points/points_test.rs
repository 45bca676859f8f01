#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use healthmate_core::entities::{health_records, points_history, step_rewards};
    use healthmate_core::health::HealthPatch;
    use healthmate_core::points::{points_for_steps, SOURCE_MANUAL, SOURCE_STEPS};
    use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
    use tokio::task::JoinSet;

    use crate::health::list_records::ListHealthRecordsUseCase;
    use crate::health::submit_record::SubmitHealthRecordUseCase;
    use crate::points::add_points::AddPointsUseCase;
    use crate::points::balance::{GetBalanceUseCase, GetHistoryUseCase};
    use crate::points::dtos::*;
    use crate::points::ranking::PointsRankingUseCase;
    use crate::points::record_steps::RecordStepsUseCase;
    use crate::test_support::{create_user, test_db, FileDb};
    use crate::AppError;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn manual(points: i64) -> AddPointsRequest {
        AddPointsRequest {
            points,
            source_category: SOURCE_MANUAL.to_string(),
            source_note: None,
            record_date: None,
        }
    }

    fn steps(steps: i64, date: NaiveDate) -> RecordStepsRequest {
        RecordStepsRequest {
            steps,
            record_date: Some(date),
        }
    }

    #[tokio::test]
    async fn test_add_points_updates_balance_and_history() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        let added = AddPointsUseCase::execute(&db, user, manual(50), day(1)).await.unwrap();
        assert_eq!(added.total_points, 50);
        assert_eq!(
            GetBalanceUseCase::execute(&db, user).await.unwrap(),
            BalanceResponse { total_points: 50 }
        );

        let history = GetHistoryUseCase::execute(&db, user, 20).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].points, 50);
        assert_eq!(history[0].source_category, SOURCE_MANUAL);
        assert_eq!(history[0].record_date, day(1));
    }

    #[tokio::test]
    async fn test_balance_accumulates_signed_deltas() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        AddPointsUseCase::execute(&db, user, manual(30), day(1)).await.unwrap();
        let after = AddPointsUseCase::execute(
            &db,
            user,
            AddPointsRequest {
                points: -12,
                source_category: " redeem ".to_string(),
                source_note: Some("water bottle".to_string()),
                record_date: Some(day(2)),
            },
            day(3),
        )
        .await
        .unwrap();
        assert_eq!(after.total_points, 18);

        let history = GetHistoryUseCase::execute(&db, user, 20).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].points, -12);
        assert_eq!(history[0].source_category, "redeem");
        assert_eq!(history[0].source_note.as_deref(), Some("water bottle"));
        assert_eq!(history[0].record_date, day(2));
    }

    #[tokio::test]
    async fn test_invalid_accruals_write_nothing() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        let zero = AddPointsUseCase::execute(&db, user, manual(0), day(1)).await;
        assert!(matches!(zero, Err(AppError::Validation(_))));

        let blank_category = AddPointsRequest {
            source_category: "   ".to_string(),
            ..manual(5)
        };
        let blank = AddPointsUseCase::execute(&db, user, blank_category, day(1)).await;
        assert!(matches!(blank, Err(AppError::Validation(_))));

        assert_eq!(GetBalanceUseCase::execute(&db, user).await.unwrap().total_points, 0);
        assert!(GetHistoryUseCase::execute(&db, user, 20).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_has_zero_balance() {
        let db = test_db().await;
        let balance = GetBalanceUseCase::execute(&db, 4242).await.unwrap();
        assert_eq!(balance.total_points, 0);
    }

    #[tokio::test]
    async fn test_step_resubmission_accrues_difference() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        let first = RecordStepsUseCase::execute(&db, user, steps(5000, day(1)), day(1))
            .await
            .unwrap();
        assert_eq!(first.points_earned_delta, 10);
        assert_eq!(first.total_points, 10);

        let second = RecordStepsUseCase::execute(&db, user, steps(12_000, day(1)), day(1))
            .await
            .unwrap();
        assert_eq!(second.points_earned_delta, 14);
        assert_eq!(second.total_points, 24);

        let history = GetHistoryUseCase::execute(&db, user, 20).await.unwrap();
        let deltas: Vec<i64> = history.iter().map(|h| h.points).collect();
        assert_eq!(deltas, vec![14, 10]);
        assert!(history.iter().all(|h| h.source_category == SOURCE_STEPS));

        // Steps are mirrored into the day's health record
        let records = ListHealthRecordsUseCase::execute(&db, user, 7).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].steps, 12_000);
    }

    #[tokio::test]
    async fn test_unchanged_points_add_no_history() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        RecordStepsUseCase::execute(&db, user, steps(5000, day(1)), day(1))
            .await
            .unwrap();
        // 5400 steps is still 10 points
        let same = RecordStepsUseCase::execute(&db, user, steps(5400, day(1)), day(1))
            .await
            .unwrap();
        assert_eq!(same.points_earned_delta, 0);
        assert_eq!(same.total_points, 10);
        assert_eq!(GetHistoryUseCase::execute(&db, user, 20).await.unwrap().len(), 1);

        let lower = RecordStepsUseCase::execute(&db, user, steps(1000, day(1)), day(1))
            .await
            .unwrap();
        assert_eq!(lower.points_earned_delta, -8);
        assert_eq!(lower.total_points, 2);
    }

    #[tokio::test]
    async fn test_days_are_rewarded_independently() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        RecordStepsUseCase::execute(&db, user, steps(5000, day(1)), day(2))
            .await
            .unwrap();
        let today = RecordStepsUseCase::execute(&db, user, RecordStepsRequest { steps: 1000, record_date: None }, day(2))
            .await
            .unwrap();
        assert_eq!(today.record_date, day(2));
        assert_eq!(today.points_earned_delta, 2);
        assert_eq!(today.total_points, 12);
    }

    #[tokio::test]
    async fn test_negative_steps_rejected() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        let result = RecordStepsUseCase::execute(&db, user, steps(-5, day(1)), day(1)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(ListHealthRecordsUseCase::execute(&db, user, 7)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_points_ranking_ties_keep_insertion_order() {
        let db = test_db().await;
        let alice = create_user(&db, "alice").await;
        let bob = create_user(&db, "bob").await;
        let carol = create_user(&db, "carol").await;
        create_user(&db, "dave").await;

        AddPointsUseCase::execute(&db, carol, manual(20), day(1)).await.unwrap();
        AddPointsUseCase::execute(&db, alice, manual(20), day(1)).await.unwrap();
        AddPointsUseCase::execute(&db, bob, manual(40), day(1)).await.unwrap();

        let ranking = PointsRankingUseCase::execute(&db, 10).await.unwrap();
        let order: Vec<(usize, &str, i64)> = ranking
            .iter()
            .map(|e| (e.rank, e.username.as_str(), e.total_points))
            .collect();
        assert_eq!(order, vec![(1, "bob", 40), (2, "carol", 20), (3, "alice", 20)]);

        let top = PointsRankingUseCase::execute(&db, 1).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].user_id, bob);
    }

    #[tokio::test]
    async fn test_failed_step_report_rolls_back_accrual() {
        let db = test_db().await;
        let user = create_user(&db, "alice").await;

        // The health mirror is the last write, after the points were accrued
        db.execute_unprepared("DROP TABLE health_records").await.unwrap();
        let result = RecordStepsUseCase::execute(&db, user, steps(5000, day(1)), day(1)).await;
        assert!(matches!(result, Err(AppError::Database(_))));

        assert_eq!(GetBalanceUseCase::execute(&db, user).await.unwrap().total_points, 0);
        assert!(GetHistoryUseCase::execute(&db, user, 20).await.unwrap().is_empty());
        assert!(step_rewards::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_accruals_stay_consistent() {
        let store = FileDb::open("accruals", 8).await;
        let db = store.db.clone();
        let user = create_user(&db, "alice").await;

        let mut tasks = JoinSet::new();
        for i in 1..=20i64 {
            let conn = db.clone();
            tasks.spawn(async move {
                RecordStepsUseCase::execute(&conn, user, steps(i * 700, day(1)), day(1))
                    .await
                    .map(|_| ())
            });
            let conn = db.clone();
            tasks.spawn(async move {
                AddPointsUseCase::execute(&conn, user, manual(1), day(1))
                    .await
                    .map(|_| ())
            });
            let conn = db.clone();
            tasks.spawn(async move {
                let patch = HealthPatch {
                    sleep_score: Some(60 + i as i32),
                    ..Default::default()
                };
                SubmitHealthRecordUseCase::execute(&conn, user, day(1), patch)
                    .await
                    .map(|_| ())
            });
        }
        while let Some(joined) = tasks.join_next().await {
            joined.unwrap().unwrap();
        }

        let history = points_history::Entity::find()
            .filter(points_history::Column::UserId.eq(user))
            .all(&db)
            .await
            .unwrap();
        let sum = |category: &str| -> i64 {
            history
                .iter()
                .filter(|h| h.source_category == category)
                .map(|h| h.points)
                .sum()
        };
        let balance = GetBalanceUseCase::execute(&db, user).await.unwrap().total_points;
        assert_eq!(balance, history.iter().map(|h| h.points).sum::<i64>());
        assert_eq!(sum(SOURCE_MANUAL), 20);

        // Whichever report landed last, the step deltas add up to its reward
        let reward = step_rewards::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(reward.points_earned, points_for_steps(reward.steps));
        assert_eq!(sum(SOURCE_STEPS), reward.points_earned);

        let records = health_records::Entity::find().all(&db).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].steps, reward.steps);
        assert!((61..=80).contains(&records[0].sleep_score));
    }
}
