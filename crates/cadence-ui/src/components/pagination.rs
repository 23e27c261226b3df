use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
  pub page:        usize,
  pub total_pages: usize,
  pub on_prev:
    Callback<MouseEvent>,
  pub on_next:
    Callback<MouseEvent>
}

#[function_component(Pagination)]
pub fn pagination(
  props: &PaginationProps
) -> Html {
  html! {
      <div class="pagination">
          <button
              class="btn"
              onclick={props.on_prev.clone()}
              disabled={props.page <= 1}
          >
              { "Previous" }
          </button>
          <span class="page-label">
              { format!("Page {} of {}", props.page, props.total_pages) }
          </span>
          <button
              class="btn"
              onclick={props.on_next.clone()}
              disabled={props.page >= props.total_pages}
          >
              { "Next" }
          </button>
      </div>
  }
}
