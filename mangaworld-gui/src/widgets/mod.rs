pub mod author_form;
pub mod author_table;
pub mod dialogs;
pub mod work_form;
pub mod work_table;
