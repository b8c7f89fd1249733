//! In-memory host used by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde_json::Value;

use super::{FieldElement, FormElement, Host, Submitter};

#[derive(Clone, Default)]
pub(crate) struct MockDocument {
    forms: Arc<Mutex<Vec<MockForm>>>,
}

impl MockDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_form(&self, id: &str) -> MockForm {
        let form = MockForm::new(id);
        self.forms.lock().push(form.clone());
        form
    }
}

impl Host for MockDocument {
    type Form = MockForm;

    fn find_form(&self, form_id: &str) -> Option<MockForm> {
        self.forms.lock().iter().find(|form| form.0.id == form_id).cloned()
    }
}

struct FormInner {
    id: String,
    fields: Mutex<Vec<MockField>>,
    payload: Mutex<Value>,
    resets: AtomicUsize,
    intents: Mutex<Vec<(String, bool)>>,
}

#[derive(Clone)]
pub(crate) struct MockForm(Arc<FormInner>);

impl MockForm {
    pub(crate) fn new(id: &str) -> Self {
        Self(Arc::new(FormInner {
            id: id.to_string(),
            fields: Mutex::new(Vec::new()),
            payload: Mutex::new(Value::Null),
            resets: AtomicUsize::new(0),
            intents: Mutex::new(Vec::new()),
        }))
    }

    pub(crate) fn field(&self, name: &str) -> MockField {
        self.attach(name, true)
    }

    pub(crate) fn fieldset(&self, name: &str) -> MockField {
        self.attach(name, false)
    }

    fn attach(&self, name: &str, validatable: bool) -> MockField {
        let field = MockField(Arc::new(FieldInner {
            name: name.to_string(),
            form: Arc::downgrade(&self.0),
            validatable,
            custom_validity: Mutex::new(String::new()),
            focused: AtomicUsize::new(0),
        }));
        self.0.fields.lock().push(field.clone());
        field
    }

    pub(crate) fn set_payload(&self, payload: Value) {
        *self.0.payload.lock() = payload;
    }

    pub(crate) fn reset_count(&self) -> usize {
        self.0.resets.load(Ordering::SeqCst)
    }

    pub(crate) fn intents(&self) -> Vec<(String, bool)> {
        self.0.intents.lock().clone()
    }
}

impl PartialEq for MockForm {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FormElement for MockForm {
    type Field = MockField;

    fn fields(&self) -> Vec<MockField> {
        self.0.fields.lock().clone()
    }

    fn payload(&self, _submitter: Option<&Submitter>) -> Value {
        self.0.payload.lock().clone()
    }

    fn action(&self) -> String {
        format!("/{}", self.0.id)
    }

    fn enc_type(&self) -> String {
        "application/x-www-form-urlencoded".to_string()
    }

    fn method(&self) -> String {
        "post".to_string()
    }

    fn reset(&self) {
        self.0.resets.fetch_add(1, Ordering::SeqCst);
    }

    fn request_intent(&self, value: &str, form_no_validate: bool) {
        self.0.intents.lock().push((value.to_string(), form_no_validate));
    }
}

struct FieldInner {
    name: String,
    form: Weak<FormInner>,
    validatable: bool,
    custom_validity: Mutex<String>,
    focused: AtomicUsize,
}

#[derive(Clone)]
pub(crate) struct MockField(Arc<FieldInner>);

impl MockField {
    pub(crate) fn custom_validity(&self) -> String {
        self.0.custom_validity.lock().clone()
    }

    pub(crate) fn focus_count(&self) -> usize {
        self.0.focused.load(Ordering::SeqCst)
    }
}

impl FieldElement for MockField {
    type Form = MockForm;

    fn name(&self) -> Option<String> {
        Some(self.0.name.clone())
    }

    fn form(&self) -> Option<MockForm> {
        self.0.form.upgrade().map(MockForm)
    }

    fn is_validatable(&self) -> bool {
        self.0.validatable
    }

    fn set_custom_validity(&self, message: &str) {
        *self.0.custom_validity.lock() = message.to_string();
    }

    fn validation_message(&self) -> String {
        self.custom_validity()
    }

    fn focus(&self) {
        self.0.focused.fetch_add(1, Ordering::SeqCst);
    }
}
