//! UI Components
//!
//! Reusable Leptos components.

mod category_tabs;
mod edit_item_modal;
mod edit_weight_modal;
mod goal_planner_modal;
mod item_list;
mod new_item_form;
mod remove_button;
mod set_rows;
mod settings_panel;
mod stats_summary;
mod task_item;
mod weight_chart;
mod weight_panel;

pub use category_tabs::CategoryTabs;
pub use edit_item_modal::EditItemModal;
pub use edit_weight_modal::EditWeightModal;
pub use goal_planner_modal::GoalPlannerModal;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use remove_button::RemoveButton;
pub use set_rows::SetRows;
pub use settings_panel::SettingsPanel;
pub use stats_summary::StatsSummary;
pub use task_item::TaskItem;
pub use weight_chart::WeightChart;
pub use weight_panel::WeightPanel;
