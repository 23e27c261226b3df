use cadence_shared::{
  StatisticsDto,
  TaskCreate,
  TaskDto,
  TasksDeleteArgs
};
use gloo::net::http::{
  Request,
  Response
};
use serde::{
  Deserialize,
  de::DeserializeOwned
};

const API_CONFIG_TOML: &str =
  include_str!("../assets/api.toml");
const DEFAULT_BASE_URL: &str =
  "http://localhost:4000/api";

#[derive(Deserialize)]
struct ApiConfig {
  base_url: Option<String>
}

fn base_url() -> String {
  match toml::from_str::<ApiConfig>(
    API_CONFIG_TOML
  ) {
    | Ok(config) => config
      .base_url
      .unwrap_or_else(|| {
        DEFAULT_BASE_URL.to_string()
      }),
    | Err(err) => {
      tracing::warn!(
        error = %err,
        "invalid api.toml, using \
         default base url"
      );
      DEFAULT_BASE_URL.to_string()
    }
  }
}

fn endpoint(path: &str) -> String {
  format!(
    "{}{path}",
    base_url().trim_end_matches('/')
  )
}

#[derive(Deserialize)]
struct ApiErrorBody {
  error:   Option<String>,
  message: Option<String>
}

async fn error_detail(
  response: Response
) -> String {
  let status = response.status();
  if let Ok(body) =
    response.text().await
    && let Ok(decoded) = serde_json::from_str::<ApiErrorBody>(&body)
    && let Some(detail) = decoded
      .error
      .or(decoded.message)
  {
    return detail;
  }
  format!(
    "request failed with status \
     {status}"
  )
}

async fn read_json<R>(
  response: Response
) -> Result<R, String>
where
  R: DeserializeOwned
{
  if !response.ok() {
    return Err(
      error_detail(response).await
    );
  }

  response
    .json::<R>()
    .await
    .map_err(|e| {
      format!("decode error: {e}")
    })
}

pub async fn fetch_tasks()
-> Result<Vec<TaskDto>, String> {
  let response =
    Request::get(&endpoint("/tasks"))
      .send()
      .await
      .map_err(|e| {
        format!("network error: {e}")
      })?;

  read_json(response).await
}

pub async fn create_task(
  create: &TaskCreate
) -> Result<TaskDto, String> {
  let response =
    Request::post(&endpoint("/tasks"))
      .json(create)
      .map_err(|e| {
        format!(
          "failed to encode task: {e}"
        )
      })?
      .send()
      .await
      .map_err(|e| {
        format!("network error: {e}")
      })?;

  read_json(response).await
}

pub async fn update_task(
  task: &TaskDto
) -> Result<TaskDto, String> {
  let url = endpoint(&format!(
    "/tasks/{}",
    task.id
  ));
  let response = Request::put(&url)
    .json(task)
    .map_err(|e| {
      format!(
        "failed to encode task: {e}"
      )
    })?
    .send()
    .await
    .map_err(|e| {
      format!("network error: {e}")
    })?;

  read_json(response).await
}

pub async fn delete_tasks(
  ids: Vec<String>
) -> Result<(), String> {
  let args = TasksDeleteArgs { ids };
  let response = Request::delete(
    &endpoint("/tasks")
  )
  .json(&args)
  .map_err(|e| {
    format!(
      "failed to encode ids: {e}"
    )
  })?
  .send()
  .await
  .map_err(|e| {
    format!("network error: {e}")
  })?;

  if !response.ok() {
    return Err(
      error_detail(response).await
    );
  }
  Ok(())
}

pub async fn fetch_statistics()
-> Result<StatisticsDto, String> {
  let response = Request::get(
    &endpoint("/tasks/statistics")
  )
  .send()
  .await
  .map_err(|e| {
    format!("network error: {e}")
  })?;

  read_json(response).await
}
