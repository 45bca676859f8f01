//! Typed partial update for the per-day health record.
//!
//! A submission is a [`HealthPatch`]: every metric is optional, and only the
//! metrics that are present end up in the upsert. The patch is destructured
//! exhaustively, so adding a column to the record without wiring it here is
//! a compile error.

use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::entities::health_records::{ActiveModel, Column};

pub const DEFAULT_STEPS_GOAL: i64 = 10_000;
pub const DEFAULT_CALORIES_GOAL: f64 = 2_000.0;
/// Mood value meaning "never reported"
pub const MOOD_UNSET: i32 = -1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthPatch {
    pub steps: Option<i64>,
    pub steps_goal: Option<i64>,
    pub distance: Option<f64>,
    pub calories_burned: Option<f64>,
    pub current_heart_rate: Option<i32>,
    pub resting_heart_rate: Option<i32>,
    pub min_heart_rate: Option<i32>,
    pub avg_heart_rate: Option<i32>,
    pub max_heart_rate: Option<i32>,
    pub current_blood_oxygen: Option<i32>,
    pub min_blood_oxygen: Option<i32>,
    pub avg_blood_oxygen: Option<i32>,
    pub max_blood_oxygen: Option<i32>,
    pub sleep_score: Option<i32>,
    pub sleep_duration: Option<i32>,
    pub sleep_start_time: Option<String>,
    pub sleep_end_time: Option<String>,
    pub deep_sleep_duration: Option<i32>,
    pub light_sleep_duration: Option<i32>,
    pub rem_sleep_duration: Option<i32>,
    pub awake_duration: Option<i32>,
    pub active_calories: Option<f64>,
    pub calories_goal: Option<f64>,
    pub activity_calories: Option<f64>,
    pub basic_metabolism_calories: Option<f64>,
    pub current_mood: Option<i32>,
}

macro_rules! merge_fields {
    ($model:ident, $columns:ident; $($field:ident => $column:ident),+ $(,)?) => {
        $(
            if let Some(value) = $field {
                $model.$field = Set(value);
                $columns.push(Column::$column);
            }
        )+
    };
}

impl HealthPatch {
    pub fn steps_only(steps: i64) -> Self {
        Self {
            steps: Some(steps),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Name of the first counter carrying a negative value, if any.
    /// Mood is excluded since it has its own sentinel.
    pub fn negative_field(&self) -> Option<&'static str> {
        let ints = [
            ("steps", self.steps),
            ("steps_goal", self.steps_goal),
            ("current_heart_rate", self.current_heart_rate.map(i64::from)),
            ("resting_heart_rate", self.resting_heart_rate.map(i64::from)),
            ("min_heart_rate", self.min_heart_rate.map(i64::from)),
            ("avg_heart_rate", self.avg_heart_rate.map(i64::from)),
            ("max_heart_rate", self.max_heart_rate.map(i64::from)),
            ("current_blood_oxygen", self.current_blood_oxygen.map(i64::from)),
            ("min_blood_oxygen", self.min_blood_oxygen.map(i64::from)),
            ("avg_blood_oxygen", self.avg_blood_oxygen.map(i64::from)),
            ("max_blood_oxygen", self.max_blood_oxygen.map(i64::from)),
            ("sleep_score", self.sleep_score.map(i64::from)),
            ("sleep_duration", self.sleep_duration.map(i64::from)),
            ("deep_sleep_duration", self.deep_sleep_duration.map(i64::from)),
            ("light_sleep_duration", self.light_sleep_duration.map(i64::from)),
            ("rem_sleep_duration", self.rem_sleep_duration.map(i64::from)),
            ("awake_duration", self.awake_duration.map(i64::from)),
        ];
        let floats = [
            ("distance", self.distance),
            ("calories_burned", self.calories_burned),
            ("active_calories", self.active_calories),
            ("calories_goal", self.calories_goal),
            ("activity_calories", self.activity_calories),
            ("basic_metabolism_calories", self.basic_metabolism_calories),
        ];

        ints.iter()
            .find(|(_, v)| matches!(v, Some(n) if *n < 0))
            .map(|(name, _)| *name)
            .or_else(|| {
                floats
                    .iter()
                    .find(|(_, v)| matches!(v, Some(n) if *n < 0.0))
                    .map(|(name, _)| *name)
            })
    }

    /// Splits the patch into the row to insert when the day has no record yet
    /// and the columns an existing row has to take over from it on conflict.
    /// Columns missing from the insert fall back to their schema defaults.
    pub fn into_upsert(
        self,
        user_id: i32,
        record_date: NaiveDate,
        now: DateTime<FixedOffset>,
    ) -> (ActiveModel, Vec<Column>) {
        let HealthPatch {
            steps,
            steps_goal,
            distance,
            calories_burned,
            current_heart_rate,
            resting_heart_rate,
            min_heart_rate,
            avg_heart_rate,
            max_heart_rate,
            current_blood_oxygen,
            min_blood_oxygen,
            avg_blood_oxygen,
            max_blood_oxygen,
            sleep_score,
            sleep_duration,
            sleep_start_time,
            sleep_end_time,
            deep_sleep_duration,
            light_sleep_duration,
            rem_sleep_duration,
            awake_duration,
            active_calories,
            calories_goal,
            activity_calories,
            basic_metabolism_calories,
            current_mood,
        } = self;

        let mut model = ActiveModel {
            user_id: Set(user_id),
            record_date: Set(record_date),
            updated_at: Set(now),
            ..Default::default()
        };
        let mut columns = Vec::new();

        merge_fields!(model, columns;
            steps => Steps,
            steps_goal => StepsGoal,
            distance => Distance,
            calories_burned => CaloriesBurned,
            current_heart_rate => CurrentHeartRate,
            resting_heart_rate => RestingHeartRate,
            min_heart_rate => MinHeartRate,
            avg_heart_rate => AvgHeartRate,
            max_heart_rate => MaxHeartRate,
            current_blood_oxygen => CurrentBloodOxygen,
            min_blood_oxygen => MinBloodOxygen,
            avg_blood_oxygen => AvgBloodOxygen,
            max_blood_oxygen => MaxBloodOxygen,
            sleep_score => SleepScore,
            sleep_duration => SleepDuration,
            sleep_start_time => SleepStartTime,
            sleep_end_time => SleepEndTime,
            deep_sleep_duration => DeepSleepDuration,
            light_sleep_duration => LightSleepDuration,
            rem_sleep_duration => RemSleepDuration,
            awake_duration => AwakeDuration,
            active_calories => ActiveCalories,
            calories_goal => CaloriesGoal,
            activity_calories => ActivityCalories,
            basic_metabolism_calories => BasicMetabolismCalories,
            current_mood => CurrentMood,
        );

        if !columns.is_empty() {
            columns.push(Column::UpdatedAt);
        }

        (model, columns)
    }
}
