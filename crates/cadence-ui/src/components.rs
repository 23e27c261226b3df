mod filter_bar;
mod list_actions;
mod nav_bar;
mod pagination;
mod stat_card;
mod task_modal;
mod task_row;
mod task_table;

pub use filter_bar::FilterBar;
pub use list_actions::ListActions;
pub use nav_bar::NavBar;
pub use pagination::Pagination;
pub use stat_card::StatCard;
pub use task_modal::{
  ModalMode,
  ModalState,
  TaskModal,
  format_draft_time,
  parse_draft_time
};
pub use task_row::TaskRow;
pub use task_table::TaskTable;
