use cadence_shared::StatisticsDto;
use yew::{
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api;
use crate::components::StatCard;

fn percent_label(value: f64) -> String {
  format!("{value}%")
}

fn hours_label(value: f64) -> String {
  format!("{value} hrs")
}

fn average_label(
  value: Option<f64>
) -> String {
  value
    .map(|v| format!("{v:.1} hrs"))
    .unwrap_or_else(|| {
      "N/A".to_string()
    })
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
  let stats = use_state(|| {
    None::<StatisticsDto>
  });
  let loading = use_state(|| true);
  let error =
    use_state(|| None::<String>);

  {
    let stats = stats.clone();
    let loading = loading.clone();
    let error = error.clone();

    use_effect_with((), move |_| {
      let stats = stats.clone();
      let loading = loading.clone();
      let error = error.clone();

      wasm_bindgen_futures::spawn_local(async move {
          tracing::info!("fetching statistics snapshot");

          match api::fetch_statistics().await {
              Ok(snapshot) => {
                  stats.set(Some(snapshot));
                  error.set(None);
              }
              Err(err) => {
                  tracing::error!(error = %err, "statistics fetch failed");
                  error.set(Some("Failed to fetch statistics".to_string()));
              }
          }
          loading.set(false);
      });

      || ()
    });
  }

  html! {
      <div class="panel">
          <div class="panel-title">{ "Dashboard" }</div>
          {
              if let Some(message) = (*error).clone() {
                  html! { <div class="error-banner">{ message }</div> }
              } else {
                  html! {}
              }
          }
          {
              if *loading {
                  html! { <div class="loading">{ "Loading statistics..." }</div> }
              } else if let Some(snapshot) = (*stats).clone() {
                  html! {
                      <>
                          <div class="cards">
                              <StatCard
                                  label="Total Tasks"
                                  value={snapshot.total_tasks.to_string()}
                              />
                              <StatCard
                                  label="Tasks Completed"
                                  value={percent_label(snapshot.completed_percentage)}
                              />
                              <StatCard
                                  label="Tasks Pending"
                                  value={percent_label(snapshot.pending_percentage)}
                              />
                              <StatCard
                                  label="Avg Time per Task"
                                  value={average_label(snapshot.average_completion_time)}
                              />
                          </div>
                          <div class="summary">
                              <div class="summary-title">{ "Pending Task Summary" }</div>
                              <div class="cards">
                                  <StatCard
                                      label="Pending Tasks"
                                      value={snapshot.pending_tasks.to_string()}
                                  />
                                  <StatCard
                                      label="Total Time Lapsed"
                                      value={hours_label(snapshot.total_time_lapsed)}
                                  />
                                  <StatCard
                                      label="Total Time to Finish"
                                      value={hours_label(snapshot.total_time_to_finish)}
                                  />
                              </div>
                              <table class="task-table">
                                  <thead>
                                      <tr>
                                          <th>{ "Task Priority" }</th>
                                          <th>{ "Pending Tasks" }</th>
                                          <th>{ "Time Lapsed (hrs)" }</th>
                                          <th>{ "Time to Finish (hrs)" }</th>
                                      </tr>
                                  </thead>
                                  <tbody>
                                      {
                                          for snapshot.pending_task_summary.iter().map(|row| html! {
                                              <tr class="row">
                                                  <td class="center">{ row.priority }</td>
                                                  <td class="center">{ row.pending_tasks }</td>
                                                  <td class="center">{ row.time_lapsed }</td>
                                                  <td class="center">{ row.time_to_finish }</td>
                                              </tr>
                                          })
                                      }
                                  </tbody>
                              </table>
                          </div>
                      </>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
