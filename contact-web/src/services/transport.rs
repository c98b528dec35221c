//! HTTP transport for form submissions, via gloo-net (fetch)

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_core::error::{AppError, Result};
use lib_core::form::{SubmitMethod, SubmitRequest, Transport};
use shared::dto::contact::FormEntries;
use web_sys::FormData;

use crate::utils::dom::js_error;
use crate::utils::url::append_query;

/// Sends the form with `fetch`.
///
/// `POST` forms go out as `multipart/form-data`; `GET` forms carry the fields
/// in the query string. The response body is never read.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &SubmitRequest) -> Result<u16> {
        let response = match request.method {
            SubmitMethod::Post => {
                let body = form_data(&request.fields)?;
                Request::post(&request.action)
                    .header("Accept", request.accept)
                    .body(body)
                    .map_err(transport_error)?
                    .send()
                    .await
            }
            SubmitMethod::Get => {
                Request::get(&append_query(&request.action, request.fields.as_slice()))
                    .header("Accept", request.accept)
                    .send()
                    .await
            }
        }
        .map_err(transport_error)?;

        log::debug!("Form endpoint answered {} {}", response.status(), response.status_text());
        Ok(response.status())
    }
}

fn form_data(fields: &FormEntries) -> Result<FormData> {
    let data = FormData::new().map_err(|err| js_error("create FormData", err))?;
    for (name, value) in fields.iter() {
        data.append_with_str(name, value)
            .map_err(|err| js_error("append form field", err))?;
    }
    Ok(data)
}

fn transport_error(err: gloo_net::Error) -> AppError {
    AppError::Transport(err.to_string())
}
