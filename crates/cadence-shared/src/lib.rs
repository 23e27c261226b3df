pub mod list;
pub mod time;

use chrono::{
  DateTime,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum TaskStatus {
  Pending,
  Finished
}

impl TaskStatus {
  pub fn as_key(
    &self
  ) -> &'static str {
    match self {
      | Self::Pending => "Pending",
      | Self::Finished => "Finished"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "Pending" => {
        Some(Self::Pending)
      }
      | "Finished" => {
        Some(Self::Finished)
      }
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
  pub id:         String,
  #[serde(default)]
  pub title:      String,
  pub priority:   u8,
  pub status:     TaskStatus,
  #[serde(default)]
  pub start_time: Option<DateTime<Utc>>,
  #[serde(default)]
  pub end_time:   Option<DateTime<Utc>>,
  #[serde(default)]
  pub total_time: Option<f64>
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
  pub title:      String,
  pub priority:   u8,
  pub status:     TaskStatus,
  pub start_time: DateTime<Utc>,
  pub end_time:   DateTime<Utc>,
  pub total_time: f64
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TasksDeleteArgs {
  pub ids: Vec<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct PendingPrioritySummary {
  pub priority:       u8,
  pub pending_tasks:  u64,
  pub time_lapsed:    f64,
  pub time_to_finish: f64
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
  pub total_tasks:          u64,
  pub completed_percentage: f64,
  pub pending_percentage:   f64,
  pub pending_tasks:        u64,
  pub total_time_lapsed:    f64,
  pub total_time_to_finish: f64,
  #[serde(default)]
  pub average_completion_time:
    Option<f64>,
  #[serde(default)]
  pub pending_task_summary:
    Vec<PendingPrioritySummary>
}

#[cfg(test)]
mod wire_tests {
  use super::*;

  #[test]
  fn decodes_server_task_payload() {
    let raw = r#"[
      {
        "id": "6762a1f0c3e1",
        "title": "Ship report",
        "priority": 3,
        "status": "Pending",
        "startTime": "2026-08-01T09:00:00Z",
        "endTime": "2026-08-01T17:30:00Z",
        "totalTime": 8.5
      },
      {
        "id": "6762a1f0c3e2",
        "title": "Untimed task",
        "priority": 1,
        "status": "Finished"
      }
    ]"#;

    let tasks: Vec<TaskDto> =
      serde_json::from_str(raw)
        .expect("decode tasks");
    assert_eq!(tasks.len(), 2);
    assert_eq!(
      tasks[0].status,
      TaskStatus::Pending
    );
    assert_eq!(
      tasks[0].total_time,
      Some(8.5)
    );
    assert!(
      tasks[1].start_time.is_none()
    );
    assert!(
      tasks[1].total_time.is_none()
    );
  }

  #[test]
  fn create_payload_is_camel_case() {
    let create = TaskCreate {
      title:      "Review PR"
        .to_string(),
      priority:   2,
      status:     TaskStatus::Pending,
      start_time: "2026-08-01T09:00:00Z"
        .parse()
        .expect("start"),
      end_time:   "2026-08-01T10:00:00Z"
        .parse()
        .expect("end"),
      total_time: 1.0
    };

    let value =
      serde_json::to_value(&create)
        .expect("encode create");
    assert!(
      value.get("startTime").is_some()
    );
    assert!(
      value.get("endTime").is_some()
    );
    assert!(
      value.get("totalTime").is_some()
    );
    assert!(
      value.get("start_time").is_none()
    );
  }

  #[test]
  fn decodes_statistics_snapshot() {
    let raw = r#"{
      "totalTasks": 12,
      "completedPercentage": 25.0,
      "pendingPercentage": 75.0,
      "pendingTasks": 9,
      "totalTimeLapsed": 40.5,
      "totalTimeToFinish": 12.25,
      "averageCompletionTime": 3.2,
      "pendingTaskSummary": [
        {
          "priority": 1,
          "pendingTasks": 4,
          "timeLapsed": 10.0,
          "timeToFinish": 2.5
        }
      ]
    }"#;

    let stats: StatisticsDto =
      serde_json::from_str(raw)
        .expect("decode statistics");
    assert_eq!(stats.total_tasks, 12);
    assert_eq!(
      stats.average_completion_time,
      Some(3.2)
    );
    assert_eq!(
      stats.pending_task_summary.len(),
      1
    );
    assert_eq!(
      stats.pending_task_summary[0]
        .priority,
      1
    );
  }

  #[test]
  fn statistics_tolerates_missing_average(
  ) {
    let raw = r#"{
      "totalTasks": 0,
      "completedPercentage": 0.0,
      "pendingPercentage": 0.0,
      "pendingTasks": 0,
      "totalTimeLapsed": 0.0,
      "totalTimeToFinish": 0.0
    }"#;

    let stats: StatisticsDto =
      serde_json::from_str(raw)
        .expect("decode statistics");
    assert!(
      stats
        .average_completion_time
        .is_none()
    );
    assert!(
      stats
        .pending_task_summary
        .is_empty()
    );
  }
}
