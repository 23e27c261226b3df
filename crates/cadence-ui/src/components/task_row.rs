use cadence_shared::TaskDto;
use chrono::{
  DateTime,
  Utc
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:             TaskDto,
  pub checked:          bool,
  pub on_toggle_select:
    Callback<String>,
  pub on_edit:
    Callback<TaskDto>
}

fn display_time(
  time: Option<DateTime<Utc>>
) -> String {
  time
    .map(|t| {
      t.format("%Y-%m-%d %H:%M")
        .to_string()
    })
    .unwrap_or_else(|| {
      "N/A".to_string()
    })
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let id = props.task.id.clone();
  let on_toggle = {
    let on_toggle_select =
      props.on_toggle_select.clone();
    let id = id.clone();
    Callback::from(
      move |_: web_sys::Event| {
        on_toggle_select
          .emit(id.clone());
      }
    )
  };
  let on_edit_click = {
    let on_edit =
      props.on_edit.clone();
    let task = props.task.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        on_edit.emit(task.clone());
      }
    )
  };

  html! {
      <tr class="row">
          <td class="center">
              <input
                  type="checkbox"
                  checked={props.checked}
                  onchange={on_toggle}
              />
          </td>
          <td class="center mono">{ &props.task.id }</td>
          <td>{ &props.task.title }</td>
          <td class="center">{ props.task.priority }</td>
          <td class="center">{ props.task.status.as_key() }</td>
          <td>{ display_time(props.task.start_time) }</td>
          <td>{ display_time(props.task.end_time) }</td>
          <td class="center">
              <button class="link" onclick={on_edit_click}>{ "Edit" }</button>
          </td>
      </tr>
  }
}
