use std::cmp::Ordering;

use chrono::{
  DateTime,
  Utc
};

use crate::{
  TaskDto,
  TaskStatus
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SortKey {
  StartAsc,
  StartDesc,
  EndAsc,
  EndDesc
}

impl SortKey {
  pub fn all() -> [Self; 4] {
    [
      Self::StartAsc,
      Self::StartDesc,
      Self::EndAsc,
      Self::EndDesc
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::StartAsc => "start_asc",
      | Self::StartDesc => {
        "start_desc"
      }
      | Self::EndAsc => "end_asc",
      | Self::EndDesc => "end_desc"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::StartAsc => {
        "Start time: ASC"
      }
      | Self::StartDesc => {
        "Start time: DESC"
      }
      | Self::EndAsc => {
        "End time: ASC"
      }
      | Self::EndDesc => {
        "End time: DESC"
      }
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "start_asc" => {
        Some(Self::StartAsc)
      }
      | "start_desc" => {
        Some(Self::StartDesc)
      }
      | "end_asc" => Some(Self::EndAsc),
      | "end_desc" => {
        Some(Self::EndDesc)
      }
      | _ => None
    }
  }
}

pub fn filter_visible_tasks(
  tasks: &[TaskDto],
  priority: Option<u8>,
  status: Option<TaskStatus>
) -> Vec<TaskDto> {
  tasks
    .iter()
    .filter(|task| {
      if let Some(p) = priority
        && task.priority != p
      {
        return false;
      }

      if let Some(s) = &status
        && task.status != *s
      {
        return false;
      }

      true
    })
    .cloned()
    .collect()
}

// Tasks missing the sorted field sink
// to the end in both directions.
fn cmp_time(
  a: Option<DateTime<Utc>>,
  b: Option<DateTime<Utc>>,
  descending: bool
) -> Ordering {
  match (a, b) {
    | (Some(x), Some(y)) => {
      if descending {
        y.cmp(&x)
      } else {
        x.cmp(&y)
      }
    }
    | (Some(_), None) => {
      Ordering::Less
    }
    | (None, Some(_)) => {
      Ordering::Greater
    }
    | (None, None) => Ordering::Equal
  }
}

pub fn sort_tasks(
  mut tasks: Vec<TaskDto>,
  key: Option<SortKey>
) -> Vec<TaskDto> {
  let Some(key) = key else {
    return tasks;
  };

  tasks.sort_by(|a, b| match key {
    | SortKey::StartAsc => cmp_time(
      a.start_time,
      b.start_time,
      false
    ),
    | SortKey::StartDesc => cmp_time(
      a.start_time,
      b.start_time,
      true
    ),
    | SortKey::EndAsc => cmp_time(
      a.end_time, b.end_time, false
    ),
    | SortKey::EndDesc => cmp_time(
      a.end_time, b.end_time, true
    )
  });
  tasks
}

/// Page count over the filtered set,
/// never below one.
pub fn total_pages(
  filtered_len: usize,
  page_size: usize
) -> usize {
  filtered_len
    .div_ceil(page_size)
    .max(1)
}

pub fn clamp_page(
  page: usize,
  total_pages: usize
) -> usize {
  page.clamp(1, total_pages)
}

pub fn page_slice(
  tasks: &[TaskDto],
  page: usize,
  page_size: usize
) -> &[TaskDto] {
  let start = page
    .saturating_sub(1)
    .saturating_mul(page_size);
  if start >= tasks.len() {
    return &[];
  }

  let end = (start + page_size)
    .min(tasks.len());
  &tasks[start..end]
}

#[cfg(test)]
mod list_tests {
  use chrono::{
    Duration,
    TimeZone,
    Utc
  };

  use super::*;

  fn task_at(
    id: &str,
    priority: u8,
    status: TaskStatus,
    start_hour: Option<i64>,
    end_hour: Option<i64>
  ) -> TaskDto {
    let base = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 0, 0, 0
      )
      .unwrap();
    TaskDto {
      id: id.to_string(),
      title: format!("task {id}"),
      priority,
      status,
      start_time: start_hour.map(
        |h| base + Duration::hours(h)
      ),
      end_time: end_hour.map(|h| {
        base + Duration::hours(h)
      }),
      total_time: None
    }
  }

  fn fixture() -> Vec<TaskDto> {
    vec![
      task_at(
        "a",
        1,
        TaskStatus::Pending,
        Some(4),
        Some(9)
      ),
      task_at(
        "b",
        2,
        TaskStatus::Finished,
        Some(1),
        Some(12)
      ),
      task_at(
        "c",
        2,
        TaskStatus::Pending,
        Some(7),
        Some(8)
      ),
      task_at(
        "d",
        3,
        TaskStatus::Pending,
        Some(2),
        Some(3)
      ),
    ]
  }

  #[test]
  fn priority_filter_matches_only_that_priority(
  ) {
    let visible =
      filter_visible_tasks(
        &fixture(),
        Some(2),
        None
      );
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(
      |task| task.priority == 2
    ));
  }

  #[test]
  fn combined_filters_intersect() {
    let visible =
      filter_visible_tasks(
        &fixture(),
        Some(2),
        Some(TaskStatus::Pending)
      );
    let ids: Vec<&str> = visible
      .iter()
      .map(|task| task.id.as_str())
      .collect();
    assert_eq!(ids, vec!["c"]);
  }

  #[test]
  fn status_filter_ignores_priority_order(
  ) {
    // priorities [1, 2, 2, 3]
    let visible =
      filter_visible_tasks(
        &fixture(),
        None,
        Some(TaskStatus::Pending)
      );
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(
      |task| task.status
        == TaskStatus::Pending
    ));
  }

  #[test]
  fn sort_by_start_is_monotone() {
    let sorted = sort_tasks(
      fixture(),
      Some(SortKey::StartAsc)
    );
    let starts: Vec<_> = sorted
      .iter()
      .filter_map(|task| {
        task.start_time
      })
      .collect();
    assert!(starts
      .windows(2)
      .all(|w| w[0] <= w[1]));

    let sorted = sort_tasks(
      fixture(),
      Some(SortKey::StartDesc)
    );
    let starts: Vec<_> = sorted
      .iter()
      .filter_map(|task| {
        task.start_time
      })
      .collect();
    assert!(starts
      .windows(2)
      .all(|w| w[0] >= w[1]));
  }

  #[test]
  fn sort_by_end_is_monotone() {
    let sorted = sort_tasks(
      fixture(),
      Some(SortKey::EndAsc)
    );
    let ids: Vec<&str> = sorted
      .iter()
      .map(|task| task.id.as_str())
      .collect();
    assert_eq!(
      ids,
      vec!["d", "c", "a", "b"]
    );
  }

  #[test]
  fn missing_times_sort_last_both_ways(
  ) {
    let mut tasks = fixture();
    tasks.push(task_at(
      "e",
      1,
      TaskStatus::Pending,
      None,
      None
    ));

    for key in [
      SortKey::StartAsc,
      SortKey::StartDesc
    ] {
      let sorted = sort_tasks(
        tasks.clone(),
        Some(key)
      );
      assert_eq!(
        sorted
          .last()
          .map(|task| {
            task.id.as_str()
          }),
        Some("e")
      );
    }
  }

  #[test]
  fn no_sort_key_preserves_order() {
    let ids: Vec<String> = sort_tasks(
      fixture(),
      None
    )
    .into_iter()
    .map(|task| task.id)
    .collect();
    assert_eq!(
      ids,
      vec!["a", "b", "c", "d"]
    );
  }

  #[test]
  fn pages_concatenate_to_full_sequence(
  ) {
    let sorted = sort_tasks(
      fixture(),
      Some(SortKey::StartAsc)
    );
    let page_size = 3;
    let total = total_pages(
      sorted.len(),
      page_size
    );
    assert_eq!(total, 2);

    let mut rebuilt = Vec::new();
    for page in 1..=total {
      rebuilt.extend_from_slice(
        page_slice(
          &sorted, page, page_size
        )
      );
    }
    assert_eq!(rebuilt, sorted);
  }

  #[test]
  fn page_clamps_into_valid_range() {
    assert_eq!(total_pages(0, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(9, 3), 3);
    assert!(page_slice(
      &fixture(),
      9,
      5
    )
    .is_empty());
  }

  #[test]
  fn sort_key_round_trips_keys() {
    for key in SortKey::all() {
      assert_eq!(
        SortKey::from_key(
          key.as_key()
        ),
        Some(key)
      );
    }
    assert_eq!(
      SortKey::from_key("bogus"),
      None
    );
  }
}
