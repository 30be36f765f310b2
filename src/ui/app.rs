use tokio::sync::mpsc;

use crate::api::{SummarizeRequest, SummaryItem};
use crate::config::Config;
use crate::ui::form::{FormField, FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::request::{RequestIntent, RequestReducer, RequestState};
use crate::ui::results::{AccordionIntent, AccordionReducer, AccordionState};

/// Where keyboard input goes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Field(FormField),
    Results,
}

/// Commands sent to the async worker.
#[derive(Debug)]
pub enum UiCommand {
    Summarize {
        request: SummarizeRequest,
        generation: u64,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Submission form values (MVI pattern).
    form: FormState,
    /// Validation or worker-dispatch error shown under the form.
    form_error: Option<String>,
    /// Lifecycle of the current request (MVI pattern).
    request: RequestState,
    /// Expansion state of the result panels (MVI pattern).
    accordion: AccordionState,
    /// Panel the cursor is on while the results area has focus.
    selected_panel: usize,
    /// Submission counter. Worker events are tagged with the generation of
    /// the submission that spawned them; anything older is dropped, so a
    /// stale response can never overwrite a newer one.
    generation: u64,
    command_tx: UiCommandSender,
    service_base_url: String,
}

impl App {
    pub fn new(config: &Config, command_tx: UiCommandSender) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Field(FormField::Url),
            form: FormState {
                max_patch_notes: config.defaults.max_patch_notes,
                ..FormState::default()
            },
            form_error: None,
            request: RequestState::default(),
            accordion: AccordionState::default(),
            selected_panel: 0,
            generation: 0,
            command_tx,
            service_base_url: config.service.base_url.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn accordion(&self) -> &AccordionState {
        &self.accordion
    }

    pub fn selected_panel(&self) -> usize {
        self.selected_panel
    }

    pub fn service_base_url(&self) -> &str {
        &self.service_base_url
    }

    /// Prefill the catalogue URL field (from the command line).
    pub fn prefill_url(&mut self, url: String) {
        self.dispatch_form(FormIntent::Paste {
            field: FormField::Url,
            text: url,
        });
    }

    // ------------------------------------------------------------------
    // Focus handling
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Field(FormField::MaxItems) if self.has_results() => Focus::Results,
            Focus::Field(field) => Focus::Field(field.next()),
            Focus::Results => Focus::Field(FormField::Url),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Field(FormField::Url) if self.has_results() => Focus::Results,
            Focus::Field(field) => Focus::Field(field.prev()),
            Focus::Results => Focus::Field(FormField::MaxItems),
        };
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Field(FormField::Url);
    }

    fn has_results(&self) -> bool {
        !self.request.items().is_empty()
    }

    // ------------------------------------------------------------------
    // Form editing
    // ------------------------------------------------------------------

    pub fn on_char(&mut self, ch: char) {
        if let Focus::Field(field) = self.focus {
            if field.is_text() {
                self.form_error = None;
                self.dispatch_form(FormIntent::Input { field, ch });
            }
        }
    }

    pub fn on_backspace(&mut self) {
        if let Focus::Field(field) = self.focus {
            if field.is_text() {
                self.form_error = None;
                self.dispatch_form(FormIntent::Backspace { field });
            }
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if let Focus::Field(field) = self.focus {
            if field.is_text() {
                self.form_error = None;
                self.dispatch_form(FormIntent::Paste {
                    field,
                    text: text.to_string(),
                });
            }
        }
    }

    pub fn step_max_items(&mut self, delta: i8) {
        self.dispatch_form(FormIntent::StepMaxItems { delta });
    }

    // ------------------------------------------------------------------
    // Submission lifecycle
    // ------------------------------------------------------------------

    /// Validate the form and hand one request to the worker.
    ///
    /// A no-op while a request is already in flight: the trigger is
    /// disabled during Pending, and the generation guard would drop the
    /// superseded response anyway.
    pub fn submit(&mut self) {
        if self.request.is_pending() {
            return;
        }

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.form_error = Some(err.to_string());
                return;
            }
        };

        self.form_error = None;
        self.generation += 1;
        let generation = self.generation;

        if let Err(err) = self.command_tx.try_send(UiCommand::Summarize {
            request,
            generation,
        }) {
            self.form_error = Some(format!("Worker unavailable: {}", err));
            return;
        }

        self.dispatch_request(RequestIntent::Submitted);
        self.dispatch_accordion(AccordionIntent::Reset { item_count: 0 });
        self.selected_panel = 0;
    }

    /// Progress-indicator tick from the worker.
    pub fn on_progress_tick(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.dispatch_request(RequestIntent::ProgressTick);
    }

    /// Terminal transition from the worker.
    pub fn on_request_finished(
        &mut self,
        generation: u64,
        result: Result<Vec<SummaryItem>, String>,
    ) {
        if generation != self.generation {
            // Superseded request; drop silently.
            return;
        }

        if let Ok(items) = &result {
            self.dispatch_accordion(AccordionIntent::Reset {
                item_count: items.len(),
            });
            self.selected_panel = 0;
            if !items.is_empty() {
                self.focus = Focus::Results;
            }
        }
        self.dispatch_request(RequestIntent::Completed { result });
    }

    // ------------------------------------------------------------------
    // Results navigation
    // ------------------------------------------------------------------

    pub fn toggle_selected_panel(&mut self) {
        if !self.has_results() {
            return;
        }
        let index = self.selected_panel;
        self.dispatch_accordion(AccordionIntent::Toggle { index });
    }

    pub fn move_panel_selection(&mut self, direction: i32) {
        let count = self.request.items().len();
        if count == 0 {
            self.selected_panel = 0;
            return;
        }

        let current = self.selected_panel.min(count - 1);
        self.selected_panel = if direction.is_negative() {
            if current == 0 {
                count - 1
            } else {
                current - 1
            }
        } else if current + 1 >= count {
            0
        } else {
            current + 1
        };
    }

    // ------------------------------------------------------------------
    // MVI dispatch
    // ------------------------------------------------------------------

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_request(&mut self, intent: RequestIntent) {
        dispatch_mvi!(self, request, RequestReducer, intent);
    }

    fn dispatch_accordion(&mut self, intent: AccordionIntent) {
        dispatch_mvi!(self, accordion, AccordionReducer, intent);
    }
}
