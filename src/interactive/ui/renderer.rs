use crate::interactive::ui::app_state::{AppState, Surface};
use crate::interactive::ui::components::{
    Component, alert_dialog::AlertDialog, book_detail::BookDetail, dashboard::Dashboard,
    help_dialog::HelpDialog, search_modal::SearchModal, suggestion_list::SuggestionList,
};
use ratatui::Frame;

/// Owns the widgets and composes the frame: dashboard underneath, then the
/// visible surfaces bottom-to-top in stack order, the alert above all.
pub struct Renderer {
    dashboard: Dashboard,
    search_modal: SearchModal,
    suggestion_list: SuggestionList,
    book_detail: BookDetail,
    help_dialog: HelpDialog,
    alert_dialog: AlertDialog,
}

impl Renderer {
    pub fn new(email: &str) -> Self {
        Self {
            dashboard: Dashboard::new(email),
            search_modal: SearchModal::new(),
            suggestion_list: SuggestionList::new(),
            book_detail: BookDetail::new(),
            help_dialog: HelpDialog::new(),
            alert_dialog: AlertDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);

        let area = f.area();
        self.dashboard.render(f, area);

        for surface in state.surfaces() {
            match surface {
                Surface::Search => self.search_modal.render(f, area),
                Surface::Suggestions => self.suggestion_list.render(f, area),
                Surface::Detail => self.book_detail.render(f, area),
                Surface::Help => self.help_dialog.render(f, area),
            }
        }

        if state.alert.is_some() {
            self.alert_dialog.render(f, area);
        }
    }

    fn sync(&mut self, state: &AppState) {
        self.dashboard
            .set_popular(state.dashboard.popular.clone(), state.dashboard.selected_index);
        self.dashboard.set_loading(state.dashboard.is_loading);

        self.search_modal.set_mode(state.session.mode);
        self.search_modal.set_query(&state.session.query);
        self.search_modal.set_filter(&state.session.filter);
        self.search_modal
            .set_results(state.session.results.clone(), state.session.selected_index);
        self.search_modal.set_searching(state.session.is_searching);
        self.search_modal.set_has_results(state.session.has_results);

        self.suggestion_list
            .set_phase(&state.suggestions.phase, state.suggestions.selected_index);

        self.book_detail.set_book(state.detail.selected.clone());

        if let Some(message) = &state.alert {
            self.alert_dialog.set_message(message);
        }
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn search_modal_mut(&mut self) -> &mut SearchModal {
        &mut self.search_modal
    }

    pub fn suggestion_list_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestion_list
    }

    pub fn book_detail_mut(&mut self) -> &mut BookDetail {
        &mut self.book_detail
    }

    pub fn help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }

    pub fn alert_dialog_mut(&mut self) -> &mut AlertDialog {
        &mut self.alert_dialog
    }
}
