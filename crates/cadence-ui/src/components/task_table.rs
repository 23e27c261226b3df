use std::collections::BTreeSet;

use cadence_shared::TaskDto;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  pub tasks:            Vec<TaskDto>,
  pub selected_ids:
    BTreeSet<String>,
  pub all_selected:     bool,
  pub on_toggle_select:
    Callback<String>,
  pub on_select_all:
    Callback<bool>,
  pub on_edit:
    Callback<TaskDto>
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  let on_select_all = {
    let on_select_all =
      props.on_select_all.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        on_select_all
          .emit(input.checked());
      }
    )
  };

  html! {
      <table class="task-table">
          <thead>
              <tr>
                  <th>
                      <input
                          type="checkbox"
                          checked={props.all_selected}
                          onchange={on_select_all}
                      />
                  </th>
                  <th>{ "Task ID" }</th>
                  <th>{ "Title" }</th>
                  <th>{ "Priority" }</th>
                  <th>{ "Status" }</th>
                  <th>{ "Start Time" }</th>
                  <th>{ "End Time" }</th>
                  <th>{ "Edit" }</th>
              </tr>
          </thead>
          <tbody>
              {
                  if props.tasks.is_empty() {
                      html! {
                          <tr>
                              <td class="empty" colspan="8">{ "No tasks to show." }</td>
                          </tr>
                      }
                  } else {
                      html! {
                          <>
                              {
                                  for props.tasks.iter().cloned().map(|task| {
                                      let checked = props.selected_ids.contains(&task.id);
                                      html! {
                                          <TaskRow
                                              task={task}
                                              checked={checked}
                                              on_toggle_select={props.on_toggle_select.clone()}
                                              on_edit={props.on_edit.clone()}
                                          />
                                      }
                                  })
                              }
                          </>
                      }
                  }
              }
          </tbody>
      </table>
  }
}
