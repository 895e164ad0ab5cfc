//! Instance manager - Owns the display pane and dispatches API calls.
//!
//! Every operation runs as an independent task on the tokio runtime and
//! reports pane changes over a channel that the UI drains each frame.
//! Nothing is coordinated between tasks: updates are applied in arrival
//! order, so the last one to land owns the pane.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::api::ApiClient;
use super::error::ClientResult;
use super::instance::{CreateInstanceRequest, Instance, InstanceAction, PowerAction};
use super::prompt::{self, Reply};
use super::render::{self, ListView, RowClick};
use super::settings::Settings;

pub const LOADING_TEXT: &str = "Loading...";

/// Called after a task has posted an update, so the UI can repaint
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Content of the single display region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Idle,
    Loading,
    /// An operation is in flight ("Deleting web1...")
    Busy(String),
    Listing(Vec<Instance>),
    /// Result of a mutating action
    Message(String),
    Error(String),
}

impl Pane {
    /// Plain text for every state except a listing
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Idle => Some(""),
            Self::Loading => Some(LOADING_TEXT),
            Self::Busy(text) | Self::Message(text) | Self::Error(text) => Some(text.as_str()),
            Self::Listing(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Spinner states
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Busy(_))
    }
}

/// Handle tasks use to post pane updates
#[derive(Clone)]
pub(crate) struct PaneSender {
    tx: UnboundedSender<Pane>,
    waker: Option<Waker>,
}

impl PaneSender {
    fn show(&self, pane: Pane) {
        // Receiver only goes away when the manager is dropped
        if self.tx.send(pane).is_ok() {
            if let Some(wake) = &self.waker {
                wake();
            }
        }
    }
}

/// Controller behind the instance list
pub struct InstanceManager {
    api: ClientResult<ApiClient>,
    runtime: Handle,
    reload_delay: Duration,
    read_only: bool,
    pane: Pane,
    last_loaded: Option<DateTime<Local>>,
    sender: PaneSender,
    updates: UnboundedReceiver<Pane>,
}

impl InstanceManager {
    pub fn new(settings: &Settings, runtime: Handle, waker: Option<Waker>) -> Self {
        let (tx, updates) = mpsc::unbounded_channel();
        let mut manager = Self {
            api: ApiClient::new(&settings.api_base_url, settings.request_timeout()),
            runtime,
            reload_delay: settings.reload_delay(),
            read_only: settings.read_only,
            pane: Pane::Idle,
            last_loaded: None,
            sender: PaneSender { tx, waker },
            updates,
        };
        manager.log_endpoint();
        manager
    }

    /// Pick up edited settings; in-flight tasks keep the client they started with
    pub fn reconfigure(&mut self, settings: &Settings) {
        self.api = ApiClient::new(&settings.api_base_url, settings.request_timeout());
        self.reload_delay = settings.reload_delay();
        self.read_only = settings.read_only;
        self.log_endpoint();
    }

    fn log_endpoint(&self) {
        match &self.api {
            Ok(api) => info!("Using instance API at {}", api.endpoint()),
            Err(e) => warn!("Instance API unavailable: {}", e),
        }
    }

    pub fn pane(&self) -> &Pane {
        &self.pane
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.api.as_ref().ok().map(ApiClient::endpoint)
    }

    /// When the last successful list arrived
    pub fn last_loaded(&self) -> Option<DateTime<Local>> {
        self.last_loaded
    }

    /// Rows to draw, when the pane holds a listing
    pub fn list_view(&self) -> Option<ListView> {
        match &self.pane {
            Pane::Listing(instances) => Some(render::render(instances, self.read_only)),
            _ => None,
        }
    }

    /// Apply every update posted since the last call. Returns how many.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(pane) = self.updates.try_recv() {
            if matches!(pane, Pane::Listing(_)) {
                self.last_loaded = Some(Local::now());
            }
            self.pane = pane;
            applied += 1;
        }
        applied
    }

    /// Client to run the next operation with, or an error pane if the
    /// configured URL is unusable
    fn client(&mut self) -> Option<ApiClient> {
        match &self.api {
            Ok(api) => Some(api.clone()),
            Err(e) => {
                self.pane = Pane::Error(e.to_string());
                None
            }
        }
    }

    pub fn load_instances(&mut self) {
        let Some(api) = self.client() else { return };
        let out = self.sender.clone();
        self.runtime.spawn(load(api, out));
    }

    /// Open the new-instance form. The returned reply belongs to the dialog;
    /// submitting it issues the request, cancelling or dropping it does not.
    pub fn begin_create(&mut self) -> Reply<CreateInstanceRequest> {
        let (reply, pending) = prompt::prompt::<CreateInstanceRequest>();
        let api = self.api.clone();
        let out = self.sender.clone();
        let delay = self.reload_delay;

        self.runtime.spawn(async move {
            let Some(form) = pending.answered().await else {
                debug!("Create cancelled");
                return;
            };
            let Some(request) = CreateInstanceRequest::from_input(&form.name, &form.image) else {
                debug!("Create aborted: name and image are both required");
                return;
            };
            match api {
                Ok(api) => create(api, out, request, delay).await,
                Err(e) => out.show(Pane::Error(e.to_string())),
            }
        });

        reply
    }

    pub fn control_instance(&mut self, name: &str, action: PowerAction) {
        let Some(api) = self.client() else { return };
        let out = self.sender.clone();
        self.runtime
            .spawn(control(api, out, name.to_string(), action, self.reload_delay));
    }

    /// Ask before deleting. The reply belongs to the confirm dialog.
    pub fn begin_delete(&mut self, name: &str) -> Reply<()> {
        let (reply, pending) = prompt::prompt();
        let api = self.api.clone();
        let out = self.sender.clone();
        let delay = self.reload_delay;
        let name = name.to_string();

        self.runtime.spawn(async move {
            if pending.answered().await.is_none() {
                debug!("Delete of {} declined", name);
                return;
            }
            match api {
                Ok(api) => delete(api, out, name, delay).await,
                Err(e) => out.show(Pane::Error(e.to_string())),
            }
        });

        reply
    }

    /// Single entry point for row buttons. Delete needs confirmation, so it
    /// hands back the reply for the confirm dialog.
    pub fn handle_click(&mut self, click: RowClick) -> Option<Reply<()>> {
        if self.read_only {
            debug!("Ignoring {:?} on {}: read-only", click.action, click.name);
            return None;
        }
        match click.action {
            InstanceAction::Delete => Some(self.begin_delete(&click.name)),
            InstanceAction::Start | InstanceAction::Stop => {
                if let Some(power) = click.action.power() {
                    self.control_instance(&click.name, power);
                }
                None
            }
        }
    }
}

pub(crate) async fn load(api: ApiClient, out: PaneSender) {
    out.show(Pane::Loading);
    match api.list_instances().await {
        Ok(instances) => {
            debug!("Loaded {} instances", instances.len());
            out.show(Pane::Listing(instances));
        }
        Err(e) => {
            warn!("Listing instances failed: {}", e);
            out.show(Pane::Error(e.to_string()));
        }
    }
}

/// Fixed-delay refresh after a mutation; the server gives no completion signal
async fn reload_after(api: ApiClient, out: PaneSender, delay: Duration) {
    tokio::time::sleep(delay).await;
    load(api, out).await;
}

pub(crate) async fn create(
    api: ApiClient,
    out: PaneSender,
    request: CreateInstanceRequest,
    delay: Duration,
) {
    info!("Creating {} from {}", request.name, request.image);
    out.show(Pane::Busy(format!("Creating container \"{}\"...", request.name)));

    match api.create_instance(&request).await {
        Ok(_) => {
            out.show(Pane::Message(format!(
                "Container \"{}\" created!",
                request.name
            )));
            reload_after(api, out, delay).await;
        }
        Err(e) => {
            warn!("Creating {} failed: {}", request.name, e);
            out.show(Pane::Error(e.to_string()));
        }
    }
}

pub(crate) async fn control(
    api: ApiClient,
    out: PaneSender,
    name: String,
    action: PowerAction,
    delay: Duration,
) {
    info!("Sending {} to {}", action, name);
    out.show(Pane::Busy(format!("{} {}...", action.progressive(), name)));

    match api.control_instance(&name, action).await {
        Ok(message) => {
            let message = message
                .unwrap_or_else(|| format!("Instance \"{}\" {}", name, action.past_tense()));
            out.show(Pane::Message(message));
            reload_after(api, out, delay).await;
        }
        Err(e) => {
            warn!("{} {} failed: {}", action.progressive(), name, e);
            out.show(Pane::Error(e.to_string()));
        }
    }
}

pub(crate) async fn delete(api: ApiClient, out: PaneSender, name: String, delay: Duration) {
    info!("Deleting {}", name);
    out.show(Pane::Busy(format!("Deleting {}...", name)));

    match api.delete_instance(&name).await {
        Ok(()) => {
            out.show(Pane::Message(format!("Instance \"{}\" deleted!", name)));
            reload_after(api, out, delay).await;
        }
        Err(e) => {
            warn!("Deleting {} failed: {}", name, e);
            out.show(Pane::Error(e.to_string()));
        }
    }
}
