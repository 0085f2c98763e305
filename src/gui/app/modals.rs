use crate::gui::{
    card_modal::CardModal,
    error_modal::ErrorModal,
    settings::SettingsModal,
};

#[derive(Default)]
pub struct Modals {
    pub error: ErrorModal,
    pub card: CardModal,
    pub settings: SettingsModal,
}
