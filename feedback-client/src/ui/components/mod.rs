pub mod feedback_form;
pub mod feedback_list;
pub mod notice;
