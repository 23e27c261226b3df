use chrono::{
  DateTime,
  Utc
};

use crate::{
  TaskDto,
  TaskStatus
};

const MILLIS_PER_HOUR: f64 =
  3_600_000.0;

/// Elapsed span in fractional hours,
/// `None` unless `start < end`.
pub fn completed_window_hours(
  start: DateTime<Utc>,
  end: DateTime<Utc>
) -> Option<f64> {
  if start >= end {
    return None;
  }

  let millis = (end - start)
    .num_milliseconds()
    as f64;
  Some(millis / MILLIS_PER_HOUR)
}

pub fn recompute_total_time(
  task: &mut TaskDto
) {
  task.total_time = match (
    task.start_time,
    task.end_time
  ) {
    | (Some(start), Some(end)) => {
      completed_window_hours(
        start, end
      )
    }
    | _ => None
  };
}

/// Pending -> Finished transition.
/// Stamps the end time with `now`
/// when not already set.
pub fn finish_task(
  task: &mut TaskDto,
  now: DateTime<Utc>
) {
  if task.status
    == TaskStatus::Finished
  {
    return;
  }

  task.status = TaskStatus::Finished;
  if task.end_time.is_none() {
    task.end_time = Some(now);
  }
  recompute_total_time(task);
}

#[cfg(test)]
mod time_tests {
  use chrono::{
    Duration,
    TimeZone,
    Utc
  };

  use super::*;

  fn base_task() -> TaskDto {
    TaskDto {
      id:         "t1".to_string(),
      title:      "task".to_string(),
      priority:   3,
      status:     TaskStatus::Pending,
      start_time: None,
      end_time:   None,
      total_time: None
    }
  }

  #[test]
  fn window_rejects_inverted_order() {
    let start = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 12, 0, 0
      )
      .unwrap();
    let end =
      start - Duration::hours(1);

    assert!(
      completed_window_hours(
        start, end
      )
      .is_none()
    );
    assert!(
      completed_window_hours(
        start, start
      )
      .is_none()
    );
  }

  #[test]
  fn window_yields_fractional_hours()
  {
    let start = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 9, 0, 0
      )
      .unwrap();
    let end = start
      + Duration::minutes(90);

    assert_eq!(
      completed_window_hours(
        start, end
      ),
      Some(1.5)
    );
  }

  #[test]
  fn finish_stamps_missing_end_time()
  {
    let now = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 17, 0, 0
      )
      .unwrap();
    let mut task = base_task();
    task.start_time =
      Some(now - Duration::hours(2));

    finish_task(&mut task, now);

    assert_eq!(
      task.status,
      TaskStatus::Finished
    );
    assert_eq!(
      task.end_time,
      Some(now)
    );
    assert!(
      task.total_time.unwrap() > 0.0
    );
  }

  #[test]
  fn finish_keeps_existing_end_time()
  {
    let now = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 17, 0, 0
      )
      .unwrap();
    let explicit_end =
      now - Duration::hours(1);
    let mut task = base_task();
    task.start_time =
      Some(now - Duration::hours(3));
    task.end_time =
      Some(explicit_end);

    finish_task(&mut task, now);

    assert_eq!(
      task.end_time,
      Some(explicit_end)
    );
    assert_eq!(
      task.total_time,
      Some(2.0)
    );
  }

  #[test]
  fn finish_is_idempotent() {
    let now = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 17, 0, 0
      )
      .unwrap();
    let mut task = base_task();
    task.status =
      TaskStatus::Finished;

    finish_task(&mut task, now);

    assert!(
      task.end_time.is_none()
    );
  }
}
