use cadence_shared::TaskStatus;
use chrono::{
  DateTime,
  NaiveDateTime,
  Utc
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  UseStateHandle,
  function_component,
  html
};

use crate::app::ui_debug;

#[derive(Clone, PartialEq)]
pub enum ModalMode {
  Add,
  Edit(String)
}

#[derive(Clone, PartialEq)]
pub struct ModalState {
  pub mode:           ModalMode,
  pub draft_title:    String,
  pub draft_priority: String,
  pub draft_status:   TaskStatus,
  pub draft_start:    String,
  pub draft_end:      String,
  pub error:          Option<String>
}

// Values produced by datetime-local
// inputs, with or without seconds.
pub fn parse_draft_time(
  value: &str
) -> Option<DateTime<Utc>> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  NaiveDateTime::parse_from_str(
    value,
    "%Y-%m-%dT%H:%M:%S"
  )
  .or_else(|_| {
    NaiveDateTime::parse_from_str(
      value,
      "%Y-%m-%dT%H:%M"
    )
  })
  .ok()
  .map(|parsed| parsed.and_utc())
}

pub fn format_draft_time(
  time: Option<DateTime<Utc>>
) -> String {
  time
    .map(|t| {
      t.format("%Y-%m-%dT%H:%M")
        .to_string()
    })
    .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub modal_state:
    UseStateHandle<Option<ModalState>>,
  pub modal_busy:           bool,
  pub on_modal_submit:
    Callback<ModalState>,
  pub on_modal_close_click:
    Callback<MouseEvent>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let modal_state =
    props.modal_state.clone();
  let is_busy = props.modal_busy;
  let on_modal_submit =
    props.on_modal_submit.clone();
  let on_modal_close_click =
    props.on_modal_close_click.clone();

  let Some(state) =
    (*modal_state).clone()
  else {
    return html! {};
  };

  let submit_state = state.clone();
  let on_save_click = {
    let on_modal_submit =
      on_modal_submit.clone();
    Callback::from(move |_| {
      ui_debug(
        "button.save.click",
        "save click fired"
      );
      on_modal_submit
        .emit(submit_state.clone());
    })
  };

  let set_status = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |status: TaskStatus| {
        if let Some(mut current) =
          (*modal_state).clone()
        {
          if status
            == TaskStatus::Finished
            && current
              .draft_end
              .trim()
              .is_empty()
          {
            current.draft_end =
              format_draft_time(
                Some(Utc::now())
              );
          }
          current.draft_status =
            status;
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="header">
                  {
                      match state.mode {
                          ModalMode::Add => "Add Task",
                          ModalMode::Edit(_) => "Edit Task",
                      }
                  }
              </div>
              <div class="content">
                  {
                      if let Some(err) = state.error.clone() {
                          html! { <div class="form-error">{ err }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <div class="field">
                      <label>{ "Title" }</label>
                      <input
                          type="text"
                          value={state.draft_title.clone()}
                          oninput={{
                              let modal_state = modal_state.clone();
                              Callback::from(move |e: web_sys::InputEvent| {
                                  let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                  if let Some(mut current) = (*modal_state).clone() {
                                      current.draft_title = input.value();
                                      current.error = None;
                                      modal_state.set(Some(current));
                                  }
                              })
                          }}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Priority" }</label>
                      <input
                          type="number"
                          min="1"
                          max="5"
                          value={state.draft_priority.clone()}
                          oninput={{
                              let modal_state = modal_state.clone();
                              Callback::from(move |e: web_sys::InputEvent| {
                                  let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                  if let Some(mut current) = (*modal_state).clone() {
                                      current.draft_priority = input.value();
                                      current.error = None;
                                      modal_state.set(Some(current));
                                  }
                              })
                          }}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Status" }</label>
                      <div class="radio-row">
                          <label class="radio">
                              <input
                                  type="radio"
                                  name="status"
                                  checked={state.draft_status == TaskStatus::Pending}
                                  onchange={{
                                      let set_status = set_status.clone();
                                      Callback::from(move |_: web_sys::Event| {
                                          set_status.emit(TaskStatus::Pending)
                                      })
                                  }}
                              />
                              { "Pending" }
                          </label>
                          <label class="radio">
                              <input
                                  type="radio"
                                  name="status"
                                  checked={state.draft_status == TaskStatus::Finished}
                                  onchange={{
                                      let set_status = set_status.clone();
                                      Callback::from(move |_: web_sys::Event| {
                                          set_status.emit(TaskStatus::Finished)
                                      })
                                  }}
                              />
                              { "Finished" }
                          </label>
                      </div>
                  </div>
                  <div class="field">
                      <label>{ "Start Time" }</label>
                      <input
                          type="datetime-local"
                          value={state.draft_start.clone()}
                          oninput={{
                              let modal_state = modal_state.clone();
                              Callback::from(move |e: web_sys::InputEvent| {
                                  let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                  if let Some(mut current) = (*modal_state).clone() {
                                      current.draft_start = input.value();
                                      current.error = None;
                                      modal_state.set(Some(current));
                                  }
                              })
                          }}
                      />
                  </div>
                  <div class="field">
                      <label>{ "End Time" }</label>
                      <input
                          type="datetime-local"
                          value={state.draft_end.clone()}
                          oninput={{
                              let modal_state = modal_state.clone();
                              Callback::from(move |e: web_sys::InputEvent| {
                                  let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                  if let Some(mut current) = (*modal_state).clone() {
                                      current.draft_end = input.value();
                                      current.error = None;
                                      modal_state.set(Some(current));
                                  }
                              })
                          }}
                      />
                  </div>
                  <div class="footer">
                      <button
                          type="button"
                          class="btn"
                          onclick={on_modal_close_click}
                      >
                          { "Cancel" }
                      </button>
                      <button
                          type="button"
                          class="btn primary"
                          onclick={on_save_click}
                          disabled={is_busy}
                      >
                          { if is_busy { "Saving..." } else { "Save" } }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}

#[cfg(test)]
mod draft_time_tests {
  use chrono::{
    TimeZone,
    Utc
  };

  use super::*;

  #[test]
  fn parses_datetime_local_values() {
    let expected = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 9, 30, 0
      )
      .unwrap();
    assert_eq!(
      parse_draft_time(
        "2026-08-01T09:30"
      ),
      Some(expected)
    );
    assert_eq!(
      parse_draft_time(
        "2026-08-01T09:30:00"
      ),
      Some(expected)
    );
    assert_eq!(
      parse_draft_time("  "),
      None
    );
    assert_eq!(
      parse_draft_time("yesterday"),
      None
    );
  }

  #[test]
  fn formats_round_trip() {
    let time = Utc
      .with_ymd_and_hms(
        2026, 8, 1, 9, 30, 0
      )
      .unwrap();
    let formatted =
      format_draft_time(Some(time));
    assert_eq!(
      formatted,
      "2026-08-01T09:30"
    );
    assert_eq!(
      parse_draft_time(&formatted),
      Some(time)
    );
    assert_eq!(
      format_draft_time(None),
      ""
    );
  }
}
