pub mod bulk_project_modal;
pub mod file_table;
pub mod header;
pub mod journal_preview;
pub mod journal_table;
pub mod modal;
pub mod reference_tables;
pub mod settings_panel;
pub mod toast;
pub mod upload_area;
pub mod voucher_modal;
pub mod workspace_list;
pub mod workspace_modals;
