//! Host protocol
//!
//! The renderer talks to the host over JSON lines. Each inbound line is an
//! [`Envelope`] carrying a command; each outbound line is either a
//! [`Response`] echoing the request id or an unsolicited [`Event`].

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use verge_core::{BrowserSnapshot, KeyEvent, Section, UiEvent};

use crate::commands::{chrome, navigation, tabs, CommandResult};
use crate::state::AppState;

pub type EventSender = mpsc::UnboundedSender<Outbound>;

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", content = "args", rename_all = "snake_case")]
pub enum Request {
    GetState,
    GetTabs,
    GetActiveTab,
    CreateTab,
    CloseTab { tab_id: String },
    ActivateTab { tab_id: String },
    UpdateTabUrl { tab_id: String, url: String },
    SetTabTitle { tab_id: String, title: String },
    SetTabIcon {
        tab_id: String,
        #[serde(default)]
        icon: Option<String>,
    },
    SubmitAddress { input: String },
    EditAddress { text: String },
    ResolveInput { input: String },
    Back,
    Forward,
    Reload,
    ContentLoaded,
    ToggleUi,
    ShowUi,
    ToggleTheme,
    ToggleSidebar,
    ToggleSection { section: Section },
    OpenShortcut { index: usize },
    KeyDown(KeyEvent),
    ResizeStart,
    PointerMove { x: f64 },
    PointerUp,
    Shutdown,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<u64>,
    #[serde(flatten)]
    pub result: CommandResult<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Sent once, before any request is read
    Ready { state: BrowserSnapshot },
    /// State changed without a request, e.g. the reload indicator timed out
    State { state: BrowserSnapshot },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outbound {
    Response(Response),
    Event(Event),
}

/// Outcome of one inbound line
pub struct Handled {
    pub response: Response,
    pub shutdown: bool,
}

/// Parse and execute one inbound line
pub fn handle_line(state: &AppState, events: &EventSender, line: &str) -> Handled {
    let envelope: Envelope = match serde_json::from_str(line) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed request");
            return Handled {
                response: Response {
                    id: None,
                    result: CommandResult::err(format!("Malformed request: {}", e)),
                },
                shutdown: false,
            };
        }
    };

    tracing::debug!(id = ?envelope.id, request = ?envelope.request, "Handling request");

    let shutdown = envelope.request == Request::Shutdown;
    let result = dispatch(state, events, envelope.request);
    if let Some(error) = &result.error {
        tracing::warn!(id = ?envelope.id, error = %error, "Request failed");
    }

    Handled {
        response: Response {
            id: envelope.id,
            result,
        },
        shutdown,
    }
}

fn dispatch(state: &AppState, events: &EventSender, request: Request) -> CommandResult<serde_json::Value> {
    match request {
        Request::GetState => chrome::get_state(state).into_json(),
        Request::GetTabs => tabs::get_tabs(state).into_json(),
        Request::GetActiveTab => tabs::get_active_tab(state).into_json(),
        Request::CreateTab => tabs::create_tab(state).into_json(),
        Request::CloseTab { tab_id } => tabs::close_tab(state, tab_id).into_json(),
        Request::ActivateTab { tab_id } => tabs::activate_tab(state, tab_id).into_json(),
        Request::UpdateTabUrl { tab_id, url } => tabs::update_tab_url(state, tab_id, url).into_json(),
        Request::SetTabTitle { tab_id, title } => {
            tabs::set_tab_title(state, tab_id, title).into_json()
        }
        Request::SetTabIcon { tab_id, icon } => tabs::set_tab_icon(state, tab_id, icon).into_json(),
        Request::SubmitAddress { input } => navigation::submit_address(state, input).into_json(),
        Request::EditAddress { text } => navigation::edit_address(state, text).into_json(),
        Request::ResolveInput { input } => navigation::resolve_input(state, input).into_json(),
        Request::Back => navigation::back(state).into_json(),
        Request::Forward => navigation::forward(state).into_json(),
        Request::Reload => navigation::reload(state, events).into_json(),
        Request::ContentLoaded => navigation::content_loaded(state).into_json(),
        Request::ToggleUi => chrome::toggle_ui(state).into_json(),
        Request::ShowUi => chrome::show_ui(state).into_json(),
        Request::ToggleTheme => chrome::toggle_theme(state).into_json(),
        Request::ToggleSidebar => chrome::toggle_sidebar(state).into_json(),
        Request::ToggleSection { section } => chrome::toggle_section(state, section).into_json(),
        Request::OpenShortcut { index } => chrome::open_shortcut(state, index).into_json(),
        Request::KeyDown(key) => chrome::key_down(state, key).into_json(),
        Request::ResizeStart => chrome::dispatch_event(state, UiEvent::ResizeHandleDown).into_json(),
        Request::PointerMove { x } => {
            chrome::dispatch_event(state, UiEvent::PointerMove { x }).into_json()
        }
        Request::PointerUp => chrome::dispatch_event(state, UiEvent::PointerUp).into_json(),
        Request::Shutdown => {
            state.shutdown();
            CommandResult::ok(serde_json::Value::Null)
        }
    }
}
