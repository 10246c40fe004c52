pub mod about_modal;
pub mod cemetery;
pub mod edit_modal;
pub mod edit_panel;
pub mod floating_card;
pub mod loading_screen;
pub mod login_modal;
pub mod pick_card;
pub mod profile_modal;
pub mod ticker;
pub mod toolbar;
