use yew::{
  Html,
  function_component,
  html
};
use yew_router::components::Link;

use crate::app::Route;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
  html! {
      <nav class="nav">
          <span class="brand">{ "Cadence" }</span>
          <Link<Route> classes="nav-link" to={Route::Tasks}>{ "Task List" }</Link<Route>>
          <Link<Route> classes="nav-link" to={Route::Dashboard}>{ "Dashboard" }</Link<Route>>
      </nav>
  }
}
