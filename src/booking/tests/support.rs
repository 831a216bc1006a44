// src/booking/tests/support.rs
//! In-memory view and scripted relay for driving the booking form

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::booking::models::{BookingField, BookingRequest};
use crate::booking::view::{BookingView, SUBMIT_LABEL};
use crate::services::{MessageRelay, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

pub struct RecordingView {
    pub values: HashMap<BookingField, String>,
    pub errors: HashMap<BookingField, String>,
    pub control: Arc<Mutex<SubmitControl>>,
    pub form_visible: bool,
    pub success_shown: usize,
    pub alerts: Vec<String>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            errors: HashMap::new(),
            control: Arc::new(Mutex::new(SubmitControl {
                enabled: true,
                label: SUBMIT_LABEL.to_string(),
            })),
            form_visible: true,
            success_shown: 0,
            alerts: Vec::new(),
        }
    }

    pub fn filled() -> Self {
        let mut view = Self::new();
        view.type_into(BookingField::Name, "Анна");
        view.type_into(BookingField::Phone, "+7 (999) 123-45-67");
        view.type_into(BookingField::Service, "tattoo");
        view
    }

    pub fn type_into(&mut self, field: BookingField, value: &str) {
        self.values.insert(field, value.to_string());
    }

    pub fn control(&self) -> SubmitControl {
        self.control.lock().unwrap().clone()
    }

    pub fn is_invalid(&self, field: BookingField) -> bool {
        self.errors.contains_key(&field)
    }
}

impl BookingView for RecordingView {
    fn field_value(&self, field: BookingField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn show_field_error(&mut self, field: BookingField, message: Option<&str>) {
        match message {
            Some(message) => {
                self.errors.insert(field, message.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn set_submit_control(&mut self, enabled: bool, label: &str) {
        let mut control = self.control.lock().unwrap();
        control.enabled = enabled;
        control.label = label.to_string();
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn show_success(&mut self) {
        self.success_shown += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Succeed,
    /// Returns the error before any suspension point.
    FailImmediately,
    /// Yields to the runtime first, then fails.
    FailAfterYield,
    Panic,
    /// Never resolves.
    Hang,
}

pub struct ScriptedRelay {
    pub behaviour: Behaviour,
    /// Submit control as observed when `deliver` was entered.
    pub control_at_call: Arc<Mutex<Vec<SubmitControl>>>,
    pub delivered: Arc<Mutex<Vec<BookingRequest>>>,
    watched_control: Option<Arc<Mutex<SubmitControl>>>,
}

impl ScriptedRelay {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            control_at_call: Arc::new(Mutex::new(Vec::new())),
            delivered: Arc::new(Mutex::new(Vec::new())),
            watched_control: None,
        }
    }

    pub fn watching(mut self, view: &RecordingView) -> Self {
        self.watched_control = Some(view.control.clone());
        self
    }
}

#[async_trait]
impl MessageRelay for ScriptedRelay {
    async fn deliver(&self, request: &BookingRequest) -> Result<(), TransportError> {
        if let Some(control) = &self.watched_control {
            let snapshot = control.lock().unwrap().clone();
            self.control_at_call.lock().unwrap().push(snapshot);
        }
        self.delivered.lock().unwrap().push(request.clone());

        match self.behaviour {
            Behaviour::Succeed => Ok(()),
            Behaviour::FailImmediately => Err(TransportError::RequestFailed(
                "connection refused".to_string(),
            )),
            Behaviour::FailAfterYield => {
                tokio::task::yield_now().await;
                Err(TransportError::Rejected {
                    status: 502,
                    body: "Bad Gateway".to_string(),
                })
            }
            Behaviour::Panic => panic!("relay blew up"),
            Behaviour::Hang => futures::future::pending().await,
        }
    }
}
