use std::collections::BTreeSet;

use cadence_shared::{
  TaskCreate,
  TaskDto,
  TaskStatus,
  list::{
    SortKey,
    clamp_page,
    filter_visible_tasks,
    page_slice,
    sort_tasks,
    total_pages
  },
  time::completed_window_hours
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api;
use crate::app::ui_debug;
use crate::components::{
  FilterBar,
  ListActions,
  ModalMode,
  ModalState,
  Pagination,
  TaskModal,
  TaskTable,
  format_draft_time,
  parse_draft_time
};

const PAGE_SIZE: usize = 5;

#[function_component(TaskListPage)]
pub fn task_list_page() -> Html {
  let tasks =
    use_state(Vec::<TaskDto>::new);
  let loading = use_state(|| true);
  let error =
    use_state(|| None::<String>);
  let sort_key =
    use_state(|| None::<SortKey>);
  let priority_filter =
    use_state(|| None::<u8>);
  let status_filter =
    use_state(|| None::<TaskStatus>);
  let bulk_selected =
    use_state(BTreeSet::<String>::new);
  let page = use_state(|| 1_usize);
  let modal_state =
    use_state(|| None::<ModalState>);
  let modal_busy = use_state(|| false);
  let refresh_tick =
    use_state(|| 0_u64);

  {
    let tasks = tasks.clone();
    let loading = loading.clone();
    let error = error.clone();

    use_effect_with(
      *refresh_tick,
      move |tick| {
        let tasks = tasks.clone();
        let loading = loading.clone();
        let error = error.clone();
        let tick = *tick;

        wasm_bindgen_futures::spawn_local(async move {
            tracing::info!(tick, "refreshing task list");

            match api::fetch_tasks().await {
                Ok(list) => {
                    tracing::debug!(total = list.len(), "task list loaded");
                    tasks.set(list);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(error = %err, "tasks fetch failed");
                    error.set(Some("Failed to fetch tasks".to_string()));
                }
            }
            loading.set(false);
        });

        || ()
      }
    );
  }

  let visible_tasks = {
    let filtered = filter_visible_tasks(
      &tasks,
      *priority_filter,
      (*status_filter).clone()
    );
    sort_tasks(filtered, *sort_key)
  };
  let pages = total_pages(
    visible_tasks.len(),
    PAGE_SIZE
  );
  let current_page =
    clamp_page(*page, pages);
  let page_tasks: Vec<TaskDto> =
    page_slice(
      &visible_tasks,
      current_page,
      PAGE_SIZE
    )
    .to_vec();
  let all_selected = !visible_tasks
    .is_empty()
    && visible_tasks.iter().all(
      |task| {
        bulk_selected
          .contains(&task.id)
      }
    );

  let on_refresh = {
    let refresh_tick =
      refresh_tick.clone();
    let loading = loading.clone();
    Callback::from(
      move |_: MouseEvent| {
        loading.set(true);
        refresh_tick.set(
          (*refresh_tick)
            .wrapping_add(1)
        );
        ui_debug(
          "action.list.refresh",
          "manual refresh requested"
        );
      }
    )
  };

  let open_add_modal = {
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    Callback::from(
      move |_: MouseEvent| {
        modal_busy.set(false);
        modal_state.set(Some(
          ModalState {
            mode:
              ModalMode::Add,
            draft_title:
              String::new(),
            draft_priority: "1"
              .to_string(),
            draft_status:
              TaskStatus::Pending,
            draft_start:
              String::new(),
            draft_end:
              String::new(),
            error: None
          }
        ));
      }
    )
  };

  let open_edit_modal = {
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    Callback::from(
      move |task: TaskDto| {
        modal_busy.set(false);
        modal_state.set(Some(
          ModalState {
            mode: ModalMode::Edit(
              task.id
            ),
            draft_title: task.title,
            draft_priority: task
              .priority
              .to_string(),
            draft_status:
              task.status,
            draft_start:
              format_draft_time(
                task.start_time
              ),
            draft_end:
              format_draft_time(
                task.end_time
              ),
            error: None
          }
        ));
      }
    )
  };

  let on_modal_close_click = {
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    Callback::from(
      move |_: MouseEvent| {
        modal_busy.set(false);
        modal_state.set(None);
        ui_debug(
          "action.modal.cancel",
          "Cancel clicked, closing \
           modal"
        );
      }
    )
  };

  let on_modal_submit = {
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    let tasks = tasks.clone();
    Callback::from(
      move |state: ModalState| {
        if *modal_busy {
          ui_debug(
            "action.modal.submit.skip",
            "ignored duplicate while \
             busy"
          );
          return;
        }

        let reject =
          |message: &str| {
            let mut next =
              state.clone();
            next.error = Some(
              message.to_string()
            );
            modal_state
              .set(Some(next));
          };

        let Ok(priority) = state
          .draft_priority
          .trim()
          .parse::<u8>()
        else {
          reject(
            "Priority must be a \
             number from 1 to 5."
          );
          return;
        };
        if !(1..=5)
          .contains(&priority)
        {
          reject(
            "Priority must be a \
             number from 1 to 5."
          );
          return;
        }

        let (
          Some(start),
          Some(end)
        ) = (
          parse_draft_time(
            &state.draft_start
          ),
          parse_draft_time(
            &state.draft_end
          )
        ) else {
          reject(
            "Start time and end \
             time are required."
          );
          return;
        };

        let Some(total) =
          completed_window_hours(
            start, end
          )
        else {
          reject(
            "Start time must be \
             before end time."
          );
          return;
        };

        modal_busy.set(true);
        let modal_state =
          modal_state.clone();
        let modal_busy =
          modal_busy.clone();
        let tasks = tasks.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match state.mode.clone() {
                ModalMode::Add => {
                    let create = TaskCreate {
                        title: state.draft_title.trim().to_string(),
                        priority,
                        status: state.draft_status.clone(),
                        start_time: start,
                        end_time: end,
                        total_time: total,
                    };

                    ui_debug("request.task_create.begin", "posting new task");
                    match api::create_task(&create).await {
                        Ok(created) => {
                            let mut next = (*tasks).clone();
                            next.push(created);
                            tasks.set(next);
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "task create failed");
                            let mut next = state.clone();
                            next.error = Some(format!("Save failed: {err}"));
                            modal_state.set(Some(next));
                            modal_busy.set(false);
                            return;
                        }
                    }
                }
                ModalMode::Edit(id) => {
                    let updated = TaskDto {
                        id: id.clone(),
                        title: state.draft_title.trim().to_string(),
                        priority,
                        status: state.draft_status.clone(),
                        start_time: Some(start),
                        end_time: Some(end),
                        total_time: Some(total),
                    };

                    ui_debug("request.task_update.begin", &format!("updating task {id}"));
                    match api::update_task(&updated).await {
                        Ok(saved) => {
                            let next: Vec<TaskDto> = (*tasks)
                                .iter()
                                .map(|task| {
                                    if task.id == saved.id {
                                        saved.clone()
                                    } else {
                                        task.clone()
                                    }
                                })
                                .collect();
                            tasks.set(next);
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "task update failed");
                            let mut next = state.clone();
                            next.error = Some(format!("Save failed: {err}"));
                            modal_state.set(Some(next));
                            modal_busy.set(false);
                            return;
                        }
                    }
                }
            }

            ui_debug("action.modal.close", "save complete, closing modal");
            modal_state.set(None);
            modal_busy.set(false);
        });
      }
    )
  };

  let on_toggle_select = {
    let bulk_selected =
      bulk_selected.clone();
    Callback::from(
      move |id: String| {
        let mut next =
          (*bulk_selected).clone();
        if !next.remove(&id) {
          next.insert(id);
        }
        bulk_selected.set(next);
      }
    )
  };

  let on_select_all = {
    let bulk_selected =
      bulk_selected.clone();
    let visible_tasks =
      visible_tasks.clone();
    Callback::from(
      move |checked: bool| {
        if checked {
          bulk_selected.set(
            visible_tasks
              .iter()
              .map(|task| {
                task.id.clone()
              })
              .collect()
          );
        } else {
          bulk_selected.set(
            BTreeSet::new()
          );
        }
      }
    )
  };

  let on_bulk_delete = {
    let bulk_selected =
      bulk_selected.clone();
    let tasks = tasks.clone();
    let error = error.clone();
    Callback::from(
      move |_: MouseEvent| {
        let ids: Vec<String> =
          bulk_selected
            .iter()
            .cloned()
            .collect();
        if ids.is_empty() {
          return;
        }

        let bulk_selected =
          bulk_selected.clone();
        let tasks = tasks.clone();
        let error = error.clone();

        wasm_bindgen_futures::spawn_local(async move {
            ui_debug(
                "request.tasks_delete.begin",
                &format!("deleting {} tasks", ids.len()),
            );
            match api::delete_tasks(ids.clone()).await {
                Ok(()) => {
                    let next: Vec<TaskDto> = (*tasks)
                        .iter()
                        .filter(|task| !ids.contains(&task.id))
                        .cloned()
                        .collect();
                    tasks.set(next);
                    bulk_selected.set(BTreeSet::new());
                }
                Err(err) => {
                    tracing::error!(error = %err, "bulk delete failed");
                    error.set(Some("Failed to delete tasks".to_string()));
                }
            }
        });
      }
    )
  };

  let on_sort_change = {
    let sort_key = sort_key.clone();
    Callback::from(
      move |key: Option<SortKey>| {
        sort_key.set(key);
      }
    )
  };

  let on_priority_change = {
    let priority_filter =
      priority_filter.clone();
    Callback::from(
      move |value: Option<u8>| {
        priority_filter.set(value);
      }
    )
  };

  let on_status_change = {
    let status_filter =
      status_filter.clone();
    Callback::from(
      move |value: Option<
        TaskStatus
      >| {
        status_filter.set(value);
      }
    )
  };

  let on_prev = {
    let page = page.clone();
    Callback::from(
      move |_: MouseEvent| {
        page.set(
          current_page
            .saturating_sub(1)
            .max(1)
        );
      }
    )
  };

  let on_next = {
    let page = page.clone();
    Callback::from(
      move |_: MouseEvent| {
        page.set(
          (current_page + 1)
            .min(pages)
        );
      }
    )
  };

  html! {
      <div class="panel">
          <div class="panel-title">{ "Task List" }</div>
          {
              if let Some(message) = (*error).clone() {
                  html! { <div class="error-banner">{ message }</div> }
              } else {
                  html! {}
              }
          }
          {
              if *loading && tasks.is_empty() {
                  html! { <div class="loading">{ "Loading tasks..." }</div> }
              } else {
                  html! {
                      <>
                          <ListActions
                              bulk_count={bulk_selected.len()}
                              on_add_click={open_add_modal}
                              on_bulk_delete={on_bulk_delete}
                              on_refresh={on_refresh}
                          />
                          <FilterBar
                              sort_key={*sort_key}
                              priority={*priority_filter}
                              status={(*status_filter).clone()}
                              on_sort_change={on_sort_change}
                              on_priority_change={on_priority_change}
                              on_status_change={on_status_change}
                          />
                          <TaskTable
                              tasks={page_tasks}
                              selected_ids={(*bulk_selected).clone()}
                              all_selected={all_selected}
                              on_toggle_select={on_toggle_select}
                              on_select_all={on_select_all}
                              on_edit={open_edit_modal}
                          />
                          <Pagination
                              page={current_page}
                              total_pages={pages}
                              on_prev={on_prev}
                              on_next={on_next}
                          />
                      </>
                  }
              }
          }
          <TaskModal
              modal_state={modal_state}
              modal_busy={*modal_busy}
              on_modal_submit={on_modal_submit}
              on_modal_close_click={on_modal_close_click}
          />
      </div>
  }
}
