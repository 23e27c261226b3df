use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ListActionsProps {
  pub bulk_count:     usize,
  pub on_add_click:
    Callback<MouseEvent>,
  pub on_bulk_delete:
    Callback<MouseEvent>,
  pub on_refresh:
    Callback<MouseEvent>
}

#[function_component(ListActions)]
pub fn list_actions(
  props: &ListActionsProps
) -> Html {
  html! {
      <div class="toolbar">
          <button class="btn primary" onclick={props.on_add_click.clone()}>{ "+ Add Task" }</button>
          {
              if props.bulk_count > 0 {
                  html! {
                      <button class="btn danger" onclick={props.on_bulk_delete.clone()}>
                          { format!("Delete Selected ({})", props.bulk_count) }
                      </button>
                  }
              } else {
                  html! {}
              }
          }
          <button class="btn" onclick={props.on_refresh.clone()}>{ "Refresh" }</button>
      </div>
  }
}
