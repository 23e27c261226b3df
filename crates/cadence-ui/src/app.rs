mod dashboard_page;
mod task_list_page;

use gloo::console::log;
use yew::{
  Html,
  function_component,
  html
};
use yew_router::{
  BrowserRouter,
  Routable,
  Switch,
  prelude::Redirect
};

use crate::components::NavBar;
use dashboard_page::DashboardPage;
use task_list_page::TaskListPage;

#[derive(
  Clone, Copy, PartialEq, Eq, Routable,
)]
pub enum Route {
  #[at("/")]
  Tasks,
  #[at("/dashboard")]
  Dashboard,
  #[not_found]
  #[at("/404")]
  NotFound
}

fn switch(route: Route) -> Html {
  match route {
    | Route::Tasks => {
      html! { <TaskListPage /> }
    }
    | Route::Dashboard => {
      html! { <DashboardPage /> }
    }
    | Route::NotFound => html! {
      <Redirect<Route> to={Route::Tasks} />
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <div class="app">
              <NavBar />
              <div class="page">
                  <Switch<Route> render={switch} />
              </div>
          </div>
      </BrowserRouter>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
