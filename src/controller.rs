//! View controller: owns the page regions and drives the analysis and
//! player-detail flows.
//!
//! One instance is built at startup. Each user action is a single awaited
//! request; region updates happen only after that request settles, and a
//! later player-detail response simply overwrites the modal content.

use tracing::{debug, warn};

use crate::{
    api::{
        http::ApiClient,
        types::{AnalysisResponse, Player},
    },
    cli::types::{PlayerId, TeamId},
    error::AnalyzerError,
    view::{
        el, ids,
        modal::player_detail,
        page::{document, PageParts},
        render_results, Node,
    },
    Result,
};


/// UI-level state of the analysis flow.
///
/// `Success` and `Error` are settled states: the form is usable again and
/// the next submit starts over from `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// A page element whose visibility and content the controller manages.
#[derive(Debug, Clone)]
pub struct Region {
    id: &'static str,
    hidden: bool,
    content: Option<Node>,
}

impl Region {
    fn new(id: &'static str, hidden: bool) -> Self {
        Self {
            id,
            hidden,
            content: None,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn content(&self) -> Option<&Node> {
        self.content.as_ref()
    }

    /// Rendered content, empty when unset.
    pub fn html(&self) -> String {
        self.content
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn set_content(&mut self, node: Node) {
        self.content = Some(node);
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    id: &'static str,
    disabled: bool,
}

impl Button {
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[derive(Debug)]
pub struct ViewController {
    client: ApiClient,
    team_id: String,
    analyze_button: Button,
    loading: Region,
    error_message: Region,
    results: Region,
    modal: Region,
    modal_content: Region,
    state: ViewState,
}

impl ViewController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            team_id: String::new(),
            analyze_button: Button {
                id: ids::ANALYZE_BUTTON,
                disabled: false,
            },
            loading: Region::new(ids::LOADING, true),
            error_message: Region::new(ids::ERROR_MESSAGE, true),
            results: Region::new(ids::RESULTS, true),
            modal: Region::new(ids::PLAYER_MODAL, true),
            modal_content: Region::new(ids::MODAL_CONTENT, false),
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == ViewState::Loading
    }

    /// Current banner text, if the error region is showing.
    pub fn error_text(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) if !self.error_message.is_hidden() => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn team_id_input(&self) -> &str {
        &self.team_id
    }

    pub fn analyze_button(&self) -> &Button {
        &self.analyze_button
    }

    pub fn loading(&self) -> &Region {
        &self.loading
    }

    pub fn error_message(&self) -> &Region {
        &self.error_message
    }

    pub fn results(&self) -> &Region {
        &self.results
    }

    pub fn modal(&self) -> &Region {
        &self.modal
    }

    pub fn modal_content(&self) -> &Region {
        &self.modal_content
    }

    /// Handle a form submission with the raw team id input.
    ///
    /// Invalid input fails locally with no request. Whatever the outcome, the
    /// loading indicator is hidden and the button re-enabled before return.
    pub async fn submit(&mut self, raw_team_id: &str) -> Result<AnalysisResponse> {
        self.team_id = raw_team_id.to_string();
        self.begin_request();

        let outcome = self.request_analysis(raw_team_id).await;
        match &outcome {
            Ok(data) => self.show_results(data),
            Err(e) => self.show_error(e),
        }

        self.finish_request();
        outcome
    }

    async fn request_analysis(&self, raw_team_id: &str) -> Result<AnalysisResponse> {
        let team_id: TeamId = raw_team_id.parse()?;
        self.client.analyze(&team_id).await
    }

    fn begin_request(&mut self) {
        self.analyze_button.disabled = true;
        self.error_message.hide();
        self.loading.show();
        self.results.hide();
        self.state = ViewState::Loading;
    }

    fn show_results(&mut self, data: &AnalysisResponse) {
        self.results.set_content(render_results(data));
        self.results.show();
        self.state = ViewState::Success;
    }

    fn show_error(&mut self, error: &AnalyzerError) {
        let message = error.user_message();
        debug!(%error, "analysis failed");
        self.error_message
            .set_content(el("p").text(message.as_str()).into());
        self.error_message.show();
        self.results.hide();
        self.state = ViewState::Error(message);
    }

    fn finish_request(&mut self) {
        self.loading.hide();
        self.analyze_button.disabled = false;
    }

    /// Fetch a player's detail record and open the modal.
    ///
    /// Failures are logged and returned; the modal is left as it was and no
    /// banner is shown.
    pub async fn open_player(&mut self, player_id: PlayerId) -> Result<Player> {
        match self.client.player(player_id).await {
            Ok(player) => {
                self.modal_content
                    .set_content(player_detail(&player).into());
                self.modal.show();
                Ok(player)
            }
            Err(error) => {
                warn!(%player_id, %error, "failed to load player details");
                Err(error)
            }
        }
    }

    /// Delegated click on a card carrying `data-player-id`.
    pub async fn click_player_card(&mut self, data_player_id: &str) -> Result<Player> {
        let player_id: PlayerId = data_player_id.parse()?;
        self.open_player(player_id).await
    }

    pub fn close_modal(&mut self) {
        self.modal.hide();
    }

    /// Click inside the modal. Closes only when the target is the backdrop
    /// element itself, not anything within the content.
    pub fn click_modal(&mut self, target_id: &str) -> bool {
        if target_id == self.modal.id() {
            self.close_modal();
            true
        } else {
            false
        }
    }

    /// Render the whole page in its current state.
    pub fn render_page(&self) -> String {
        document(&PageParts {
            team_id: &self.team_id,
            analyze_disabled: self.analyze_button.disabled,
            loading_hidden: self.loading.is_hidden(),
            error: self.error_text(),
            results_hidden: self.results.is_hidden(),
            results: self.results.content(),
            modal_hidden: self.modal.is_hidden(),
            modal_content: self.modal_content.content(),
        })
    }
}
