//! Thin wrappers over `gloo_net` adding the bearer token and error mapping

use super::ApiError;
use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::shared::multipart::{MultipartPayload, PartValue};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Pass successful responses through; map the rest to `ApiError`.
/// A 401 drops the stored tokens.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    if error == ApiError::Unauthorized {
        storage::clear_tokens();
    }
    log::error!("{} {}: {}", response.url(), status, error);
    Err(error)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&api_url(path))).send().await?;
    let response = check(response).await?;
    Ok(response.json::<T>().await?)
}

pub async fn post_multipart(path: &str, payload: &MultipartPayload) -> Result<Value, ApiError> {
    send_multipart(Request::post(&api_url(path)), payload).await
}

pub async fn patch_multipart(path: &str, payload: &MultipartPayload) -> Result<Value, ApiError> {
    send_multipart(Request::patch(&api_url(path)), payload).await
}

async fn send_multipart(
    builder: RequestBuilder,
    payload: &MultipartPayload,
) -> Result<Value, ApiError> {
    let body = to_form_data(payload)?;
    let response = with_auth(builder).body(body)?.send().await?;
    let response = check(response).await?;
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&api_url(path))).send().await?;
    check(response).await?;
    Ok(())
}

/// Browser `FormData` with the parts in payload order
pub fn to_form_data(payload: &MultipartPayload) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for part in payload.parts() {
        match &part.value {
            PartValue::Text(text) => form.append_with_str(&part.name, text).map_err(js_error)?,
            PartValue::File(file) => {
                let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                let options = BlobPropertyBag::new();
                options.set_type(&file.content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(
                    &js_sys::Array::of1(&bytes),
                    &options,
                )
                .map_err(js_error)?;
                form.append_with_blob_and_filename(&part.name, &blob, &file.file_name)
                    .map_err(js_error)?;
            }
        }
    }
    Ok(form)
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{e:?}"))
}
