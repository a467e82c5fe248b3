pub mod chat_panel;
pub mod conversation_view;
pub mod index_list;
pub mod layout;
pub mod status_banner;
pub mod upload_form;
