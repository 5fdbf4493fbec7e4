use serde::Serialize;

use crate::model::{NO_SELECTION, Problem};

#[cfg(target_arch = "wasm32")]
const DEFAULT_ENDPOINT: &str = "/get_problems";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_ENDPOINT: &str = "http://127.0.0.1:5000/get_problems";

#[derive(Debug, Serialize)]
struct ProblemsRequest {
    exam_number: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    Transport { message: String },
    Http { status: u16, body: String },
    Decode { message: String },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport { message } => write!(f, "ошибка соединения: {message}"),
            FetchError::Http { status, body } if body.is_empty() => {
                write!(f, "сервер вернул HTTP {status}")
            }
            FetchError::Http { status, body } => {
                write!(f, "сервер вернул HTTP {status}: {body}")
            }
            FetchError::Decode { message } => write!(f, "некорректный ответ сервера: {message}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_endpoint() -> String {
    std::env::var("FIPI_BROWSER_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NATIVE_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > 200 {
        let cut: String = trimmed.chars().take(200).collect();
        format!("{cut}…")
    } else {
        trimmed.to_string()
    }
}

/// Requests the problems of one exam number. The sentinel resolves to an
/// empty list without touching the network; anything else is exactly one
/// `POST {endpoint}` with the `{"exam_number": n}` payload, answered by a
/// JSON array of markup fragments.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_problems(endpoint: &str, exam_number: i32) -> Result<Vec<Problem>, FetchError> {
    if exam_number == NO_SELECTION {
        return Ok(Vec::new());
    }

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(endpoint)
        .json(&ProblemsRequest { exam_number })
        .send()
        .map_err(|err| FetchError::Transport {
            message: err.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(FetchError::Http {
            status: status.as_u16(),
            body: excerpt(&body),
        });
    }

    response
        .json::<Vec<Problem>>()
        .map_err(|err| FetchError::Decode {
            message: err.to_string(),
        })
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_problems(endpoint: &str, exam_number: i32) -> Result<Vec<Problem>, FetchError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    if exam_number == NO_SELECTION {
        return Ok(Vec::new());
    }

    let payload = serde_json::to_string(&ProblemsRequest { exam_number }).map_err(|err| {
        FetchError::Decode {
            message: err.to_string(),
        }
    })?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(endpoint, &opts).map_err(|err| FetchError::Transport {
            message: format!("{err:?}"),
        })?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| FetchError::Transport {
            message: format!("{err:?}"),
        })?;

    let window = web_sys::window().ok_or_else(|| FetchError::Transport {
        message: "нет window в окружении WASM".to_string(),
    })?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| FetchError::Transport {
            message: format!("{err:?}"),
        })?;
    let response: Response = resp_value.dyn_into().map_err(|_| FetchError::Transport {
        message: "ответ fetch не является Response".to_string(),
    })?;

    let text_promise = response.text().map_err(|err| FetchError::Transport {
        message: format!("{err:?}"),
    })?;
    let text = JsFuture::from(text_promise)
        .await
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| FetchError::Transport {
            message: "не удалось прочитать тело ответа".to_string(),
        })?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
            body: excerpt(&text),
        });
    }

    serde_json::from_str::<Vec<Problem>>(&text).map_err(|err| FetchError::Decode {
        message: err.to_string(),
    })
}
