use cadence_shared::{
  TaskStatus,
  list::SortKey
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub sort_key: Option<SortKey>,
  pub priority: Option<u8>,
  pub status:   Option<TaskStatus>,
  pub on_sort_change:
    Callback<Option<SortKey>>,
  pub on_priority_change:
    Callback<Option<u8>>,
  pub on_status_change:
    Callback<Option<TaskStatus>>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let on_sort = {
    let on_sort_change =
      props.on_sort_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        on_sort_change.emit(
          SortKey::from_key(
            &select.value()
          )
        );
      }
    )
  };

  let on_priority = {
    let on_priority_change = props
      .on_priority_change
      .clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        on_priority_change.emit(
          select
            .value()
            .parse::<u8>()
            .ok()
        );
      }
    )
  };

  let on_status = {
    let on_status_change =
      props.on_status_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        on_status_change.emit(
          TaskStatus::from_key(
            &select.value()
          )
        );
      }
    )
  };

  let sort_value = props
    .sort_key
    .map(SortKey::as_key)
    .unwrap_or_default();
  let priority_value = props
    .priority
    .map(|p| p.to_string())
    .unwrap_or_default();
  let status_value = props
    .status
    .as_ref()
    .map(TaskStatus::as_key)
    .unwrap_or_default();

  html! {
      <div class="filter-bar">
          <div class="field">
              <label>{ "Sort" }</label>
              <select value={sort_value} onchange={on_sort}>
                  <option value="">{ "Select Sort" }</option>
                  {
                      for SortKey::all().iter().map(|key| html! {
                          <option value={key.as_key()}>{ key.label() }</option>
                      })
                  }
              </select>
          </div>
          <div class="field">
              <label>{ "Priority" }</label>
              <select value={priority_value} onchange={on_priority}>
                  <option value="">{ "All Priorities" }</option>
                  {
                      for (1..=5_u8).map(|p| html! {
                          <option value={p.to_string()}>{ p }</option>
                      })
                  }
              </select>
          </div>
          <div class="field">
              <label>{ "Status" }</label>
              <select value={status_value} onchange={on_status}>
                  <option value="">{ "All Status" }</option>
                  {
                      for [TaskStatus::Pending, TaskStatus::Finished].iter().map(|status| html! {
                          <option value={status.as_key()}>{ status.as_key() }</option>
                      })
                  }
              </select>
          </div>
      </div>
  }
}
