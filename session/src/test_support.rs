//! Fakes shared by the unit tests of this crate.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::navigation::{Navigator, Page};
use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};

pub(crate) const BASE_URL: &str = "http://localhost:3001/api";

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        let status_text = match status {
            200 => "OK",
            201 => "Created",
            400 => "Bad Request",
            401 => "Unauthorized",
            405 => "Method Not Allowed",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            _ => "",
        };
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            status_text: status_text.to_owned(),
            body: body.to_owned(),
        }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(TransportError::new(message)));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no response queued")))
    }
}

pub(crate) fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(BASE_URL, transport).unwrap()
}

/// Navigator that records scheduled navigations instead of performing them.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    scheduled: RefCell<Vec<(Page, Duration)>>,
}

impl RecordingNavigator {
    pub(crate) fn scheduled(&self) -> Vec<(Page, Duration)> {
        self.scheduled.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_after(&self, page: Page, delay: Duration) {
        self.scheduled.borrow_mut().push((page, delay));
    }
}
