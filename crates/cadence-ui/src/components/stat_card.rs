use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
  pub label: String,
  pub value: String
}

#[function_component(StatCard)]
pub fn stat_card(
  props: &StatCardProps
) -> Html {
  html! {
      <div class="card">
          <div class="card-label">{ &props.label }</div>
          <div class="card-value">{ &props.value }</div>
      </div>
  }
}
